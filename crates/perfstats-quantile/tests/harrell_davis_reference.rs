//! Reference tests for the Harrell-Davis estimator
//!
//! Expected values come from R's `Hmisc::hdquantile` on the same data, so
//! these tests pin the estimator (and the incomplete-beta kernel under it)
//! to an independent implementation.

use perfstats_core::{Probability, Sample};
use perfstats_quantile::{HarrellDavis, QuantileEstimator};
use proptest::prelude::*;

fn check_table(values: &[f64], probabilities: &[f64], expected: &[f64]) {
    let sample = Sample::new(values.to_vec()).unwrap();
    for (&p, &e) in probabilities.iter().zip(expected) {
        let q = HarrellDavis
            .quantile(&sample, Probability::new(p).unwrap())
            .unwrap();
        assert!(
            (q - e).abs() < 1e-9,
            "p = {p}: got {q}, expected {e}"
        );
    }
}

#[test]
fn five_point_table() {
    check_table(
        &[0.0, 25.0, 50.0, 75.0, 100.0],
        &[
            0.0, 0.1, 0.2, 0.25, 0.3, 0.4, 0.5, 0.6, 0.7, 0.75, 0.8, 0.9, 1.0,
        ],
        &[
            0.0,
            4.81290947065674,
            13.7443607731199,
            19.2481103578583,
            25.1415863187833,
            37.4702805366232,
            50.0,
            62.5297194633768,
            74.8584136812167,
            80.7518896421417,
            86.2556392268801,
            95.1870905293433,
            100.0,
        ],
    );
}

#[test]
fn normal_sample_table() {
    // R: set.seed(42); x <- rnorm(100, 50, 5); hdquantile(x, seq(0, 1, 0.01))
    let values = [
        56.8547922357333,
        47.1765091430196,
        51.8156420566867,
        53.1643130248052,
        52.021341615705,
        49.4693774195426,
        57.5576099871947,
        49.5267048079345,
        60.0921185693852,
        49.6864295047379,
        56.5243482711174,
        61.4332269635055,
        43.0556964944383,
        48.6060561659131,
        49.3333933180317,
        53.1797519903504,
        48.5787353929196,
        36.7177228954761,
        37.7976653571224,
        56.600566728651,
        48.4668070296076,
        41.0934578301,
        49.1404132212019,
        56.073373495863,
        59.4759673063248,
        47.847654341969,
        48.7136530861554,
        41.1841845740261,
        52.3004867741564,
        46.8000256201994,
        52.2772506162061,
        53.5241866861441,
        55.1755176098496,
        46.9553681229639,
        52.5247756164899,
        41.4149566046333,
        46.0777049581025,
        45.7454620291174,
        37.9289617502668,
        50.1806130344613,
        51.0299930010013,
        48.1947135072567,
        53.7908161784976,
        46.3664758646171,
        43.1585947779035,
        52.1640901294436,
        45.9430341190666,
        57.2205063086063,
        47.8427689869333,
        53.278239417011,
        51.6096263260197,
        46.0808052955981,
        57.8786375989599,
        53.2144965285866,
        50.448803232998,
        51.3827537364573,
        53.3964440802764,
        50.4491644328954,
        35.0345495842353,
        51.4244147676533,
        48.1638267862951,
        50.926152824328,
        52.9091186368275,
        56.9986841364634,
        46.3635397026277,
        56.5127131602207,
        51.6792405987604,
        55.1925304934881,
        54.6036428414532,
        53.6043908143343,
        44.7844053071607,
        49.5490680669465,
        53.1175908099977,
        45.2323832111383,
        47.2858559271307,
        52.9049824884084,
        53.840893689173,
        52.3188379427008,
        45.5711185129516,
        44.5010955067607,
        57.5635350490246,
        51.2896071876602,
        50.4422011457979,
        49.3955173123046,
        44.0283555241974,
        53.0599844902019,
        48.9143007712674,
        49.0862164683404,
        54.6667316428558,
        54.1088655525412,
        56.9605818796714,
        47.6191303847266,
        53.2517428036315,
        56.95555228195,
        44.4460556027605,
        45.6960370656108,
        44.3413065957311,
        42.703930002488,
        50.3999127662058,
        53.266021698246,
    ];
    let probabilities: Vec<f64> = (0..=100).map(|i| i as f64 / 100.0).collect();
    let expected = [
        35.0345495842353,
        35.8665470068393,
        37.0492818595434,
        38.2011795736415,
        39.2746552410464,
        40.256109743906,
        41.1134086323857,
        41.836544474867,
        42.4426412161145,
        42.9571732297402,
        43.4009039307175,
        43.7880492225599,
        44.1290086615892,
        44.4324717809119,
        44.7058913908746,
        44.9552400136658,
        45.1849474601153,
        45.3983021471594,
        45.598114660669,
        45.7872807838542,
        45.9689878385665,
        46.1465304445227,
        46.3228875722661,
        46.5002811937488,
        46.6798931785275,
        46.8618172351466,
        47.0452259992295,
        47.2286743951137,
        47.4104452354453,
        47.5888596990133,
        47.7625064694369,
        47.9303746482844,
        48.0918990869188,
        48.2469402324582,
        48.3957251218213,
        48.538774137293,
        48.67683178313,
        48.810810932084,
        48.9417506426675,
        49.070780010505,
        49.1990768488069,
        49.3278116735592,
        49.4580740796712,
        49.5907876679314,
        49.7266275001795,
        49.865957241708,
        50.0088002452855,
        50.1548510237768,
        50.303524054992,
        50.454029286405,
        50.6054603836255,
        50.7568828230997,
        50.9074126213311,
        51.0562804241377,
        51.2028781300857,
        51.3467858441725,
        51.4877766016192,
        51.6257962880472,
        51.7609175717075,
        51.8932698940412,
        52.0229524453141,
        52.1499428444522,
        52.274019647676,
        52.3947199640351,
        52.5113522397392,
        52.6230771328159,
        52.7290564282859,
        52.8286536071956,
        52.9216545362854,
        53.0084679634636,
        53.0902667378516,
        53.1690422438322,
        53.2475629377154,
        53.329246931033,
        53.4179718177541,
        53.5178481652509,
        53.6329757966491,
        53.7671874039103,
        53.9237679032075,
        54.1051274520671,
        54.3124094550212,
        54.5450408536013,
        54.800285497896,
        55.0729345214826,
        55.3553302014041,
        55.6379222490652,
        55.9104546245791,
        56.1636794359808,
        56.3912623633759,
        56.5913968746182,
        56.7677005553656,
        56.9293335094683,
        57.0910061666847,
        57.2742817437268,
        57.5109207356806,
        57.8450445439088,
        58.3259517813988,
        58.9889424161316,
        59.834581951651,
        60.7696586964613,
        61.4332269635055,
    ];
    check_table(&values, &probabilities, &expected);
}

proptest! {
    #[test]
    fn quantile_stays_within_sample_range(
        values in prop::collection::vec(-1e6f64..1e6, 1..40),
        p in 0.0f64..=1.0,
    ) {
        let sample = Sample::new(values).unwrap();
        let q = HarrellDavis
            .quantile(&sample, Probability::new(p).unwrap())
            .unwrap();
        prop_assert!(q >= sample.min().unwrap() - 1e-9);
        prop_assert!(q <= sample.max().unwrap() + 1e-9);
    }

    #[test]
    fn quantile_is_monotone_in_probability(
        values in prop::collection::vec(-1e6f64..1e6, 1..40),
        p1 in 0.0f64..=1.0,
        p2 in 0.0f64..=1.0,
    ) {
        let (low, high) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        let sample = Sample::new(values).unwrap();
        let q_low = HarrellDavis
            .quantile(&sample, Probability::new(low).unwrap())
            .unwrap();
        let q_high = HarrellDavis
            .quantile(&sample, Probability::new(high).unwrap())
            .unwrap();
        prop_assert!(q_low <= q_high + 1e-9);
    }

    #[test]
    fn extreme_probabilities_hit_min_and_max(
        values in prop::collection::vec(-1e6f64..1e6, 1..40),
    ) {
        let sample = Sample::new(values).unwrap();
        let min = HarrellDavis.quantile(&sample, Probability::ZERO).unwrap();
        let max = HarrellDavis.quantile(&sample, Probability::ONE).unwrap();
        prop_assert_eq!(min, sample.min().unwrap());
        prop_assert_eq!(max, sample.max().unwrap());
    }
}
