//! Coefficient tables for the Lambert W function (principal branch).
//!
//! Five approximation families, one per regime:
//! - `W_MACLAURIN`: the series sum (-n)^(n-1)/n! x^n for |x| < 2^-7.
//! - `W_PADE_P` / `W_PADE_Q`: Pade approximant about 0, W ~ x P(x)/Q(x).
//! - `W_NEAR_BRANCH`: series in sqrt(x + 1/e) near the branch point -1/e.
//! - `W_POS_*`: eight rational Remez windows covering the positive axis,
//!   the last four in the variable log(x). Each window carries a fixed
//!   offset (the approximant's leading constant) fit together with the
//!   rational part.
//!
//! The window boundaries are fixed constants matched to the offline fits;
//! they are not tuned at runtime.

/// 1/e, the (negated) branch point of W.
pub const RCPR_E: f64 = 0.36787944117144233;

/// Window A numerator.
pub static W_POS_P_A: [f64; 7] = [
    0.18034076690668518,
    0.3281782414931193,
    -2.191536206871397,
    -7.24750929074564,
    -7.283958762625242,
    -2.574171694925129,
    -0.2316069488887045,
];
/// Window A denominator.
pub static W_POS_Q_A: [f64; 7] = [
    1.0,
    7.364825293074366,
    20.368600785643068,
    26.28645920966573,
    15.974204138085833,
    4.037605347883746,
    0.29132734675047534,
];
/// Window A leading offset.
pub const W_POS_OFFSET_A: f64 = 0.8196592330932617;

/// Window B numerator.
pub static W_POS_P_B: [f64; 8] = [
    0.44966408394409835,
    1.9041766619677691,
    1.99951368798256,
    -0.6912173102992702,
    -1.8853393599861705,
    -0.7967439680477508,
    -0.10289172603105526,
    -0.003091560135926366,
];
/// Window B denominator.
pub static W_POS_Q_B: [f64; 8] = [
    1.0,
    6.45854489419584,
    15.473923242211605,
    17.260616425333783,
    9.29427055609544,
    2.2904082464974813,
    0.22161062099541898,
    0.005705976699081942,
];
/// Window B leading offset.
pub const W_POS_OFFSET_B: f64 = 0.5503358840942383;

/// Window C numerator.
pub static W_POS_P_C: [f64; 8] = [
    -1.1623049498209947,
    -3.3852814443256114,
    -2.5565371729316158,
    -0.3067551729892142,
    0.1731497437652683,
    0.03769060428600142,
    0.0018455221762470667,
    1.694341269048221e-05,
];
/// Window C denominator.
pub static W_POS_Q_C: [f64; 8] = [
    1.0,
    3.7718761671122083,
    4.587999602601437,
    2.2410122846229243,
    0.4547941954262124,
    0.0360761772095964,
    0.0009251764995183886,
    4.4361134470550935e-06,
];
/// Window C leading offset.
pub const W_POS_OFFSET_C: f64 = 1.162393569946289;

/// Window D numerator.
pub static W_POS_P_D: [f64; 9] = [
    -1.8069093542479364,
    -3.6699592938031462,
    -1.9384295794014978,
    -0.29426998437579405,
    0.0018122471062767779,
    0.0024816679860354745,
    0.00011580659241539725,
    1.4310557321681554e-06,
    3.472814834283696e-09,
];
/// Window D denominator.
pub static W_POS_Q_D: [f64; 9] = [
    1.0,
    2.573190807239086,
    1.9672452844268067,
    0.5845013528826507,
    0.07371528379392063,
    0.003973684309404168,
    8.549418381870851e-05,
    6.057132256084267e-07,
    8.175172838166158e-10,
];
/// Window D leading offset.
pub const W_POS_OFFSET_D: f64 = 1.8093719482421875;

/// Window E numerator.
pub static W_POS_P_E: [f64; 9] = [
    1.9701182627931193,
    1.0563994570154671,
    0.3334345290731963,
    0.033461915320038685,
    -0.005362383537813267,
    -0.002439012948713086,
    -0.0002137620956190854,
    -4.855319364955423e-06,
    -2.0247351849190537e-08,
];
/// Window E denominator.
pub static W_POS_Q_E: [f64; 9] = [
    1.0,
    0.8601072758339217,
    0.41042046798550436,
    0.11844488408199484,
    0.021696650555602104,
    0.002245297666307691,
    9.820450902264376e-05,
    1.363635151254895e-06,
    3.4420074905323796e-09,
];
/// Window E leading offset.
pub const W_POS_OFFSET_E: f64 = -1.4029731750488281;

/// Window F numerator.
pub static W_POS_P_F: [f64; 9] = [
    3.305476384240762,
    1.6405007127755016,
    0.45714957647073606,
    0.040382122774542485,
    -0.0004996649768825144,
    -0.00012852789380305294,
    -2.9547032537333875e-06,
    -1.7666202555020277e-08,
    -1.9872197246370928e-11,
];
/// Window F denominator.
pub static W_POS_Q_F: [f64; 9] = [
    1.0,
    0.6914725594124588,
    0.24815457889167677,
    0.04608935782843353,
    0.0036020783898230197,
    0.00011300115324243048,
    1.3369094826348846e-06,
    4.972532259685489e-09,
    3.3946072373197056e-12,
];
/// Window F leading offset.
pub const W_POS_OFFSET_F: f64 = -2.735729217529297;

/// Window G numerator.
pub static W_POS_P_G: [f64; 9] = [
    5.077148583543097,
    -3.3299441451870146,
    -0.8611704169098644,
    -0.04011397053094862,
    -0.0001853742017718346,
    1.0882414584427066e-05,
    1.172169058104524e-07,
    2.97998248101386e-10,
    1.4229485643417667e-13,
];
/// Window G denominator.
pub static W_POS_Q_G: [f64; 9] = [
    1.0,
    -0.4858407706398615,
    -0.31871485060482757,
    -0.03209661292646105,
    -0.001062761780442679,
    -1.3359782864264495e-05,
    -6.279009053462195e-08,
    -9.352714980753783e-11,
    -2.6064833109007683e-14,
];
/// Window G leading offset.
pub const W_POS_OFFSET_G: f64 = -4.0128631591796875;

/// Window H numerator.
pub static W_POS_P_H: [f64; 11] = [
    6.422756601451167,
    1.3304796407336794,
    0.06720089234016528,
    0.001164440699581259,
    7.069667602374705e-06,
    5.489748961490392e-09,
    -7.003796520188536e-11,
    -1.8924763591365956e-13,
    -1.558987707901706e-16,
    -4.0610920881530314e-20,
    -2.2155269900649674e-24,
];
/// Window H denominator.
pub static W_POS_Q_H: [f64; 11] = [
    1.0,
    0.3344985884166329,
    0.025151986245638497,
    0.0006812238106224162,
    7.944508971069035e-06,
    4.306750398728813e-08,
    1.1066766945846762e-10,
    1.3101224069419229e-13,
    6.532820471777272e-17,
    1.11775518708172e-20,
    3.7825039561783606e-25,
];
/// Window H leading offset.
pub const W_POS_OFFSET_H: f64 = -5.7011566162109375;

/// Pade numerator: W ~ x P(x)/Q(x) near 0.
pub static W_PADE_P: [f64; 10] = [
    1.0,
    10.68250256541605,
    46.57196466559114,
    106.45221196874087,
    136.21315458647874,
    96.19442679507623,
    34.21269066083169,
    4.790291586754858,
    0.08700478132816973,
    -0.00235264625040089,
];

/// Pade denominator.
pub static W_PADE_Q: [f64; 9] = [
    1.0,
    11.68250256541605,
    56.75446723100719,
    148.34959201829065,
    225.37605259936808,
    200.3449697881522,
    99.32428225481557,
    24.201439090875343,
    2.0878375944665186,
];

/// Series in q = sqrt(x + 1/e) about the branch point.
pub static W_NEAR_BRANCH: [f64; 12] = [
    -1.0,
    2.331643981597124,
    -1.8121878856393634,
    1.9366311144923598,
    -2.3535512018816145,
    3.0668589010506317,
    -4.175335600258177,
    5.858023729874774,
    -8.401032217523978,
    12.25075350131446,
    -18.10069701247244,
    27.029044799010563,
];

/// Maclaurin coefficients (-n)^(n-1)/n! for n = 1..=9.
pub static W_MACLAURIN: [f64; 9] = [
    1.0,
    -1.0,
    1.5,
    -2.6666666666666665,
    5.208333333333333,
    -10.8,
    23.343055555555555,
    -52.01269841269841,
    118.62522321428571,
];
