//! Coefficient tables for the cube root.
//!
//! `RCPR_TABLE_128[k] = 1/(1 + k/128)` and `CBRT_TABLE[k] = cbrt(1 + k/128)`
//! drive the mantissa reduction; `CBRT_PARITY[p] = 2^(p/3)` restores the
//! exponent remainder mod 3. The degree-3 kernel expands cbrt(1 + s) for
//! 0 <= s < 1/128; one Newton iteration after reconstruction removes the
//! table rounding.

/// Degree-3 kernel for cbrt(1 + s), s in [0, 1/128).
pub static CBRT_KERNEL: [f64; 4] = [
    1.0,
    0.333333333333333333333333333333,
    -0.11111111111111111111111111111,
    0.061728395061728395061728395061,
];

/// Single-precision kernel (two terms suffice at f32 accuracy).
pub static CBRT_KERNEL_F32: [f32; 3] = [1.0, 0.33333334, -0.11111111];

/// 1/(1 + k/128) for k = 0..127.
pub static RCPR_TABLE_128: [f64; 128] = [
    1.0,
    0.9922480620155039,
    0.9846153846153847,
    0.9770992366412213,
    0.9696969696969697,
    0.9624060150375939,
    0.9552238805970149,
    0.9481481481481482,
    0.9411764705882353,
    0.9343065693430657,
    0.927536231884058,
    0.920863309352518,
    0.9142857142857143,
    0.9078014184397163,
    0.9014084507042254,
    0.8951048951048951,
    0.8888888888888888,
    0.8827586206896552,
    0.8767123287671232,
    0.8707482993197279,
    0.8648648648648649,
    0.8590604026845637,
    0.8533333333333334,
    0.847682119205298,
    0.8421052631578947,
    0.8366013071895425,
    0.8311688311688312,
    0.8258064516129032,
    0.8205128205128205,
    0.8152866242038217,
    0.810126582278481,
    0.8050314465408805,
    0.8,
    0.7950310559006211,
    0.7901234567901234,
    0.7852760736196319,
    0.7804878048780488,
    0.7757575757575758,
    0.7710843373493976,
    0.7664670658682635,
    0.7619047619047619,
    0.757396449704142,
    0.7529411764705882,
    0.7485380116959064,
    0.7441860465116279,
    0.7398843930635838,
    0.735632183908046,
    0.7314285714285714,
    0.7272727272727273,
    0.7231638418079096,
    0.7191011235955056,
    0.7150837988826816,
    0.7111111111111111,
    0.7071823204419889,
    0.7032967032967034,
    0.6994535519125683,
    0.6956521739130435,
    0.6918918918918919,
    0.6881720430107527,
    0.6844919786096256,
    0.6808510638297872,
    0.6772486772486772,
    0.6736842105263158,
    0.6701570680628273,
    0.6666666666666666,
    0.6632124352331606,
    0.6597938144329897,
    0.6564102564102564,
    0.6530612244897959,
    0.649746192893401,
    0.6464646464646465,
    0.6432160804020101,
    0.64,
    0.6368159203980099,
    0.6336633663366337,
    0.6305418719211823,
    0.6274509803921569,
    0.624390243902439,
    0.6213592233009708,
    0.6183574879227053,
    0.6153846153846154,
    0.6124401913875598,
    0.6095238095238096,
    0.6066350710900474,
    0.6037735849056604,
    0.6009389671361502,
    0.5981308411214953,
    0.5953488372093023,
    0.5925925925925926,
    0.5898617511520737,
    0.5871559633027523,
    0.5844748858447488,
    0.5818181818181818,
    0.579185520361991,
    0.5765765765765766,
    0.5739910313901345,
    0.5714285714285714,
    0.5688888888888889,
    0.5663716814159292,
    0.5638766519823789,
    0.5614035087719298,
    0.5589519650655022,
    0.5565217391304348,
    0.5541125541125541,
    0.5517241379310345,
    0.5493562231759657,
    0.5470085470085471,
    0.5446808510638298,
    0.5423728813559322,
    0.540084388185654,
    0.5378151260504201,
    0.5355648535564853,
    0.5333333333333333,
    0.5311203319502075,
    0.5289256198347108,
    0.5267489711934157,
    0.5245901639344263,
    0.5224489795918368,
    0.5203252032520326,
    0.5182186234817814,
    0.5161290322580645,
    0.5140562248995983,
    0.512,
    0.5099601593625498,
    0.5079365079365079,
    0.5059288537549407,
    0.5039370078740157,
    0.5019607843137255,
];

/// cbrt(1 + k/128) for k = 0..127.
pub static CBRT_TABLE: [f64; 128] = [
    1.0,
    1.0025974142646001,
    1.0051814396472645,
    1.0077522473643226,
    1.0103100051555476,
    1.0128548773804866,
    1.0153870251114199,
    1.01790660622309,
    1.020413775479337,
    1.0229086846167688,
    1.025391482425587,
    1.0278623148276862,
    1.0303213249521392,
    1.0327686532081688,
    1.0352044373557132,
    1.0376288125736755,
    1.040041911525952,
    1.0424438644253258,
    1.044834799095308,
    1.047214841030007,
    1.049584113452102,
    1.0519427373689911,
    1.0542908316271866,
    1.0566285129650201,
    1.0589558960637233,
    1.0612730935969434,
    1.0635802162787515,
    1.0658773729101998,
    1.0681646704244792,
    1.07044221393073,
    1.0727101067565519,
    1.0749684504892614,
    1.077217345015942,
    1.0794568885623264,
    1.0816871777305563,
    1.083908307535855,
    1.086120371442153,
    1.0883234613967014,
    1.0905176678637094,
    1.092703079857036,
    1.0948797849719722,
    1.097047869416141,
    1.0992074180395448,
    1.1013585143637923,
    1.103501240610526,
    1.105635677729083,
    1.1077619054234085,
    1.109880002178251,
    1.1119900452846578,
    1.1140921108647988,
    1.1161862738961343,
    1.1182726082349523,
    1.1203511866392912,
    1.1224220807912721,
    1.1244853613188537,
    1.1265410978170323,
    1.1285893588685003,
    1.1306302120637843,
    1.1326637240208732,
    1.1346899604043565,
    1.136708985944086,
    1.1387208644533735,
    1.1407256588467416,
    1.142723431157239,
    1.1447142425533319,
    1.1466981533553877,
    1.1486752230517598,
    1.1506455103144861,
    1.1526090730146117,
    1.1545659682371496,
    1.1565162522956853,
    1.1584599807466396,
    1.1603972084031948,
    1.1623279893489,
    1.164252376950959,
    1.1661704238732107,
    1.168082182088815,
    1.1699877028926446,
    1.1718870369133993,
    1.1737802341254437,
    1.1756673438603786,
    1.177548414818355,
    1.1794234950791334,
    1.1812926321128998,
    1.1831558727908422,
    1.1850132633954935,
    1.18686484963085,
    1.1887106766322688,
    1.1905507889761495,
    1.1923852306894098,
    1.1942140452587542,
    1.1960372756397482,
    1.197854964265696,
    1.199667153056333,
    1.2014738834263332,
    1.2032751962936385,
    1.205071132087615,
    1.2068617307570373,
    1.2086470317779099,
    1.210427074161126,
    1.21220189645997,
    1.2139715367774642,
    1.21573603277357,
    1.2174954216722398,
    1.2192497402683282,
    1.2209990249343643,
    1.222743311627187,
    1.2244826358944518,
    1.2262170328810043,
    1.22794653733513,
    1.229671183614682,
    1.231391005693087,
    1.233106037165235,
    1.2348163112532542,
    1.2365218608121753,
    1.238222718335485,
    1.2399189159605752,
    1.241610485474086,
    1.2432974583171477,
    1.2449798655905249,
    1.2466577380596615,
    1.248331106159632,
    1.25,
    1.2516644493695859,
    1.2533244837411461,
    1.2549801322759666,
    1.2566314238283698,
    1.258278386950141,
];

/// 2^(p/3) for p = 0, 1, 2 (exponent remainder mod 3).
pub static CBRT_PARITY: [f64; 3] = [
    1.0,
    1.2599210498948732,
    1.5874010519681994,
];

/// cbrt(1 + k/128) for k = 0..127, single precision.
pub static CBRT_TABLE_F32: [f32; 128] = [
    1.0e+00,
    1.0025975e+00,
    1.0051814e+00,
    1.0077523e+00,
    1.01031e+00,
    1.0128549e+00,
    1.015387e+00,
    1.0179067e+00,
    1.0204138e+00,
    1.0229087e+00,
    1.0253915e+00,
    1.0278623e+00,
    1.0303214e+00,
    1.0327686e+00,
    1.0352044e+00,
    1.0376288e+00,
    1.0400419e+00,
    1.0424439e+00,
    1.0448349e+00,
    1.0472149e+00,
    1.0495842e+00,
    1.0519427e+00,
    1.0542909e+00,
    1.0566285e+00,
    1.0589559e+00,
    1.0612731e+00,
    1.0635803e+00,
    1.0658773e+00,
    1.0681647e+00,
    1.0704422e+00,
    1.0727102e+00,
    1.0749685e+00,
    1.0772173e+00,
    1.0794569e+00,
    1.0816872e+00,
    1.0839083e+00,
    1.0861204e+00,
    1.0883235e+00,
    1.0905176e+00,
    1.0927031e+00,
    1.0948797e+00,
    1.0970479e+00,
    1.0992074e+00,
    1.1013585e+00,
    1.1035012e+00,
    1.1056356e+00,
    1.1077619e+00,
    1.10988e+00,
    1.1119901e+00,
    1.1140921e+00,
    1.1161863e+00,
    1.1182727e+00,
    1.1203512e+00,
    1.1224221e+00,
    1.1244854e+00,
    1.1265411e+00,
    1.1285894e+00,
    1.1306303e+00,
    1.1326637e+00,
    1.1346899e+00,
    1.136709e+00,
    1.1387209e+00,
    1.1407256e+00,
    1.1427234e+00,
    1.1447142e+00,
    1.1466981e+00,
    1.1486752e+00,
    1.1506455e+00,
    1.1526091e+00,
    1.1545659e+00,
    1.1565162e+00,
    1.15846e+00,
    1.1603972e+00,
    1.162328e+00,
    1.1642524e+00,
    1.1661705e+00,
    1.1680822e+00,
    1.1699877e+00,
    1.171887e+00,
    1.1737802e+00,
    1.1756673e+00,
    1.1775484e+00,
    1.1794235e+00,
    1.1812927e+00,
    1.1831559e+00,
    1.1850133e+00,
    1.1868649e+00,
    1.1887107e+00,
    1.1905508e+00,
    1.1923852e+00,
    1.194214e+00,
    1.1960373e+00,
    1.197855e+00,
    1.1996671e+00,
    1.2014738e+00,
    1.2032752e+00,
    1.2050711e+00,
    1.2068617e+00,
    1.208647e+00,
    1.210427e+00,
    1.212202e+00,
    1.2139715e+00,
    1.215736e+00,
    1.2174954e+00,
    1.2192497e+00,
    1.220999e+00,
    1.2227433e+00,
    1.2244827e+00,
    1.226217e+00,
    1.2279465e+00,
    1.2296712e+00,
    1.231391e+00,
    1.233106e+00,
    1.2348163e+00,
    1.2365218e+00,
    1.2382227e+00,
    1.239919e+00,
    1.2416105e+00,
    1.2432975e+00,
    1.2449799e+00,
    1.2466577e+00,
    1.2483311e+00,
    1.25e+00,
    1.2516644e+00,
    1.2533245e+00,
    1.2549801e+00,
    1.2566314e+00,
    1.2582784e+00,
];

/// 2^(p/3) for p = 0, 1, 2, single precision.
pub static CBRT_PARITY_F32: [f32; 3] = [
    1.0e+00,
    1.2599211e+00,
    1.587401e+00,
];
