//! Coefficient tables for the natural logarithm.
//!
//! `LN_TABLE[k] = ln(1 + k/64)` and `RCPR_TABLE[k] = 64/(64 + k)`: the
//! reduction writes the mantissa as u = (1 + k/64) * (u/t) with t read off
//! the top six mantissa bits, so log(u) = log(u/t) + LN_TABLE[k]. The f32
//! variant uses a 32-entry table indexed by five mantissa bits.

/// ln(2) split for exact exponent reconstruction: the high part carries
/// enough trailing zero bits that `e * LN_2_HI` is exact for |e| < 2^20.
pub const LN_2_HI: f64 = 6.93147180369123816490e-01;

/// Low part of the ln(2) split.
pub const LN_2_LO: f64 = 1.90821492927058770002e-10;

/// ln(2) at single precision.
pub const LN_2_F32: f32 = 0.6931472;

/// ln(1 + k/64) for k = 0..63.
pub static LN_TABLE: [f64; 64] = [
    0.0,
    0.015504186535965254,
    0.030771658666753687,
    0.0458095360312942,
    0.06062462181643484,
    0.07522342123758753,
    0.08961215868968714,
    0.10379679368164356,
    0.11778303565638346,
    0.13157635778871926,
    0.1451820098444979,
    0.15860503017663857,
    0.17185025692665923,
    0.184922338494012,
    0.19782574332991987,
    0.21056476910734964,
    0.22314355131420976,
    0.2355660713127669,
    0.24783616390458127,
    0.25995752443692605,
    0.27193371548364176,
    0.2837681731306446,
    0.2954642128938359,
    0.3070250352949119,
    0.3184537311185346,
    0.329753286372468,
    0.3409265869705932,
    0.3519764231571782,
    0.3629054936893685,
    0.37371640979358406,
    0.38441169891033206,
    0.394993808240869,
    0.4054651081081644,
    0.415827895143711,
    0.4260843953109001,
    0.43623676677491807,
    0.44628710262841953,
    0.4562374334815876,
    0.46608972992459924,
    0.4758459048699639,
    0.4855078157817008,
    0.4950772667978515,
    0.5045560107523953,
    0.5139457511022343,
    0.5232481437645479,
    0.5324647988694718,
    0.5415972824327444,
    0.5506471179526623,
    0.5596157879354227,
    0.5685047353526688,
    0.5773153650348236,
    0.5860490450035782,
    0.5947071077466928,
    0.6032908514380843,
    0.6118015411059929,
    0.6202404097518576,
    0.6286086594223741,
    0.6369074622370692,
    0.6451379613735847,
    0.6533012720127457,
    0.661398482245365,
    0.6694306539426292,
    0.6773988235918061,
    0.6853040030989194,
];

/// 64/(64 + k) for k = 0..63.
pub static RCPR_TABLE: [f64; 64] = [
    1.0,
    0.9846153846153847,
    0.9696969696969697,
    0.9552238805970149,
    0.9411764705882353,
    0.927536231884058,
    0.9142857142857143,
    0.9014084507042254,
    0.8888888888888888,
    0.8767123287671232,
    0.8648648648648649,
    0.8533333333333334,
    0.8421052631578947,
    0.8311688311688312,
    0.8205128205128205,
    0.810126582278481,
    0.8,
    0.7901234567901234,
    0.7804878048780488,
    0.7710843373493976,
    0.7619047619047619,
    0.7529411764705882,
    0.7441860465116279,
    0.735632183908046,
    0.7272727272727273,
    0.7191011235955056,
    0.7111111111111111,
    0.7032967032967034,
    0.6956521739130435,
    0.6881720430107527,
    0.6808510638297872,
    0.6736842105263158,
    0.6666666666666666,
    0.6597938144329897,
    0.6530612244897959,
    0.6464646464646465,
    0.64,
    0.6336633663366337,
    0.6274509803921569,
    0.6213592233009708,
    0.6153846153846154,
    0.6095238095238096,
    0.6037735849056604,
    0.5981308411214953,
    0.5925925925925926,
    0.5871559633027523,
    0.5818181818181818,
    0.5765765765765766,
    0.5714285714285714,
    0.5663716814159292,
    0.5614035087719298,
    0.5565217391304348,
    0.5517241379310345,
    0.5470085470085471,
    0.5423728813559322,
    0.5378151260504201,
    0.5333333333333333,
    0.5289256198347108,
    0.5245901639344263,
    0.5203252032520326,
    0.5161290322580645,
    0.512,
    0.5079365079365079,
    0.5039370078740157,
];

/// ln(1 + k/32) for k = 0..31, single precision.
pub static LN_TABLE_F32: [f32; 32] = [
    0.0e+00,
    3.0771658e-02,
    6.062462e-02,
    8.9612156e-02,
    1.1778303e-01,
    1.4518201e-01,
    1.7185026e-01,
    1.9782574e-01,
    2.2314355e-01,
    2.4783616e-01,
    2.719337e-01,
    2.9546422e-01,
    3.1845373e-01,
    3.409266e-01,
    3.629055e-01,
    3.844117e-01,
    4.054651e-01,
    4.260844e-01,
    4.462871e-01,
    4.6608973e-01,
    4.8550782e-01,
    5.04556e-01,
    5.2324814e-01,
    5.415973e-01,
    5.596158e-01,
    5.773154e-01,
    5.9470713e-01,
    6.1180156e-01,
    6.2860864e-01,
    6.4513797e-01,
    6.613985e-01,
    6.773988e-01,
];

/// 32/(32 + k) for k = 0..31, single precision.
pub static RCPR_TABLE_F32: [f32; 32] = [
    1.0e+00,
    9.69697e-01,
    9.411765e-01,
    9.142857e-01,
    8.888889e-01,
    8.648649e-01,
    8.4210527e-01,
    8.2051283e-01,
    8.0e-01,
    7.804878e-01,
    7.619048e-01,
    7.4418604e-01,
    7.2727275e-01,
    7.111111e-01,
    6.956522e-01,
    6.8085104e-01,
    6.666667e-01,
    6.530612e-01,
    6.4e-01,
    6.27451e-01,
    6.1538464e-01,
    6.037736e-01,
    5.925926e-01,
    5.8181816e-01,
    5.714286e-01,
    5.614035e-01,
    5.5172414e-01,
    5.423729e-01,
    5.3333336e-01,
    5.2459013e-01,
    5.16129e-01,
    5.0793654e-01,
];
