//! Coefficient tables for the exponential function.
//!
//! The reduction writes x = k ln2 + n/128 + t with |t| <= 1/128;
//! `EXP_TABLE[n + 89] = exp(n/128)` covers the table step and
//! `EXP_KERNEL` is the degree-5 Remez minimax polynomial for exp(t) on
//! the final interval (peak error ~1e-17).

/// 1/ln(2).
pub const RCPR_LN_2: f64 = 1.44269504088896338700e+00;

/// 1/128, the table spacing.
pub const ONE_BY_128: f64 = 0.0078125;

/// Degree-5 Remez kernel for exp(t), |t| <= 1/128.
pub static EXP_KERNEL: [f64; 6] = [
    1.0000000000000000098676804486032581931971677454305e+00,
    1.0000000000000000077001514598996570259345221024298e+00,
    4.9999999999708980614478940658809472988077097967424e-01,
    1.6666666666585521370389353791249722847045340843435e-01,
    4.1666793819163332764129161759693899954112387250407e-02,
    8.3333564677959633974492787478109645751141070623399e-03,
];

/// Single-precision kernel: Taylor coefficients of exp through degree 7,
/// ample for |r| <= ln(2)/2 at f32 accuracy.
pub static EXP_KERNEL_F32: [f32; 8] = [
    1.0,
    1.0,
    0.5,
    1.6666667e-1,
    4.1666668e-2,
    8.333334e-3,
    1.3888889e-3,
    1.9841270e-4,
];

/// exp(n/128) for n = -89..=89; index with n + 89.
pub static EXP_TABLE: [f64; 179] = [
    0.49891851158647194,
    0.5028315779709409,
    0.5067753349154387,
    0.5107500231290107,
    0.514755885208607,
    0.5187931656538893,
    0.5228621108821537,
    0.5269629692433709,
    0.5310959910353452,
    0.5352614285189903,
    0.5394595359337269,
    0.5436905695130004,
    0.54795478749992,
    0.5522524501630204,
    0.556583819812148,
    0.5609491608144708,
    0.5653487396106142,
    0.569782824730923,
    0.5742516868118521,
    0.5787555986124843,
    0.583294835031178,
    0.5878696731223465,
    0.5924803921133679,
    0.5971272734216274,
    0.6018106006716945,
    0.6065306597126334,
    0.6112877386354506,
    0.6160821277906783,
    0.6209141198060958,
    0.6257840096045911,
    0.6306920944221607,
    0.635638673826052,
    0.6406240497330474,
    0.645648526427892,
    0.6507124105818659,
    0.6558160112715016,
    0.6609596399974489,
    0.6661436107034878,
    0.6713682397956895,
    0.676633846161729,
    0.6819407511903481,
    0.6872892787909722,
    0.6926797554134794,
    0.6981125100681258,
    0.7035878743456275,
    0.7091061824373984,
    0.7146677711559482,
    0.7202729799554398,
    0.7259221509524082,
    0.7316156289466418,
    0.7373537614422269,
    0.7431368986687583,
    0.7489653936027156,
    0.7548396019890073,
    0.7607598823626837,
    0.76672659607082,
    0.7727401072945725,
    0.7788007830714049,
    0.7849089933174918,
    0.791065110850296,
    0.7972695114113244,
    0.8035225736890608,
    0.8098246793420792,
    0.8161762130223398,
    0.8225775623986646,
    0.8290291181804004,
    0.835531274141265,
    0.8420844271433824,
    0.8486889771615039,
    0.8553453273074225,
    0.8620538838545757,
    0.8688150562628432,
    0.8756292572035382,
    0.8824969025845955,
    0.8894184115759556,
    0.8963942066351505,
    0.9034247135330867,
    0.9105103613800342,
    0.9176515826518158,
    0.9248488132162048,
    0.9321024923595276,
    0.9394130628134758,
    0.9467809707821289,
    0.9542066659691884,
    0.9616906016054253,
    0.9692332344763441,
    0.976835024950062,
    0.9844964370054085,
    0.9922179382602435,
    1.0,
    1.007843097206448,
    1.0157477085866857,
    1.023714316602358,
    1.0317434074991028,
    1.03983547133623,
    1.0479910020166328,
    1.056210497316932,
    1.0644944589178593,
    1.0728433924348775,
    1.0812578074490395,
    1.0897382175380932,
    1.0982851403078258,
    1.1068990974236574,
    1.1155806146424807,
    1.1243302218447506,
    1.1331484530668263,
    1.1420358465335656,
    1.1509929446911764,
    1.160020294240325,
    1.1691184461695043,
    1.1782879557886632,
    1.1875293827631006,
    1.1968432911476248,
    1.2062302494209807,
    1.2156908305205474,
    1.2252256118773075,
    1.234835175451091,
    1.2445201077660952,
    1.2542809999466837,
    1.2641184477534664,
    1.274033051619661,
    1.2840254166877414,
    1.2940961528463732,
    1.3042458747676378,
    1.3144752019445491,
    1.3247847587288655,
    1.3351751743691969,
    1.3456470830494105,
    1.3562011239273402,
    1.3668379411737963,
    1.3775581840118836,
    1.3883625067566268,
    1.3992515688549068,
    1.4102260349257107,
    1.4212865748006966,
    1.4324338635650782,
    1.4436685815988268,
    1.4549914146182013,
    1.4664030537175992,
    1.4779041954117385,
    1.4894955416781699,
    1.5011778000001228,
    1.5129516834096854,
    1.5248179105313266,
    1.5367772056257567,
    1.5488302986341331,
    1.5609779252226124,
    1.573220826827253,
    1.5855597506992676,
    1.5979954499506333,
    1.6105286836000576,
    1.6231602166193055,
    1.63589081997989,
    1.6487212707001282,
    1.6616523518925677,
    1.674684852811784,
    1.6878195689025528,
    1.7010573018484008,
    1.7143988596205357,
    1.7278450565271632,
    1.7413967132631865,
    1.7550546569602985,
    1.7688197212374674,
    1.782692746251815,
    1.7966745787498977,
    1.8107660721193872,
    1.8249680864411575,
    1.8392814885417808,
    1.8537071520464343,
    1.8682459574322223,
    1.882898792081917,
    1.8976665503381187,
    1.9125501335578454,
    1.9275504501675447,
    1.9426684157185412,
    1.957904952942918,
    1.9732609918098354,
    1.988737469582292,
    2.0043353308743312,
];

/// 1/ln(2) rounded to single precision.
pub const RCPR_LN_2_F32: f32 = 1.4426950408;

/// High part of ln(2) for single precision, 16 significant bits.
pub const LN_2_HI_F32: f32 = 6.9314575195e-01;

/// Low part: ln(2) - LN_2_HI_F32.
pub const LN_2_LO_F32: f32 = 1.4286067653e-06;
