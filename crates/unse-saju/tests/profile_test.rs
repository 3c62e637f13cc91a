use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use unse_astro::StaticTimezoneDb;
use unse_core::config::SajuConfig;
use unse_core::element::Element;
use unse_core::errors::EngineError;
use unse_core::models::{BirthProfile, Gender};
use unse_saju::energy_flow::{EvidenceKind, PillarPosition};
use unse_saju::{EnergyFlowAnalyzer, SajuProfileBuilder};

fn seoul_birth(gender: Option<Gender>) -> BirthProfile {
    BirthProfile {
        date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
        time: Some(NaiveTime::from_hms_opt(14, 30, 0).unwrap()),
        latitude: 37.5665,
        longitude: 126.978,
        timezone: Some("Asia/Seoul".to_string()),
        gender,
        yongsin: None,
    }
}

fn builder(estimate: bool) -> SajuProfileBuilder {
    SajuProfileBuilder::new(
        Arc::new(StaticTimezoneDb::new()),
        SajuConfig {
            estimate_yongsin: estimate,
        },
    )
}

#[test]
fn four_pillars_of_a_known_birth() {
    let profile = builder(false).build(&seoul_birth(None)).unwrap();
    assert_eq!(profile.pillars.year.to_string(), "庚午");
    assert_eq!(profile.pillars.month.to_string(), "辛巳");
    assert_eq!(profile.pillars.day.to_string(), "庚辰");
    assert_eq!(profile.pillars.time.unwrap().to_string(), "癸未");
    assert_eq!(profile.day_master_element, Element::Metal);
    assert!(!profile.has_daeun());
    assert_eq!(profile.yongsin, None);
}

#[test]
fn unknown_time_has_no_hour_pillar() {
    let mut birth = seoul_birth(None);
    birth.time = None;
    let profile = builder(false).build(&birth).unwrap();
    assert!(!profile.has_time_pillar());
    assert_eq!(profile.pillars.day.to_string(), "庚辰");
}

#[test]
fn resolves_zone_from_coordinates() {
    let mut birth = seoul_birth(None);
    birth.timezone = None;
    let profile = builder(false).build(&birth).unwrap();
    assert_eq!(profile.pillars.time.unwrap().to_string(), "癸未");
}

#[test]
fn london_birth_in_summer_time() {
    // 1978-03-21 22:05 BST, two days after the clocks went forward.
    let birth = BirthProfile {
        date: NaiveDate::from_ymd_opt(1978, 3, 21).unwrap(),
        time: Some(NaiveTime::from_hms_opt(22, 5, 0).unwrap()),
        latitude: 51.5074,
        longitude: -0.1278,
        timezone: None,
        gender: Some(Gender::Male),
        yongsin: None,
    };
    let instant = builder(false).birth_instant(&birth).unwrap();
    assert_eq!(instant, Utc.with_ymd_and_hms(1978, 3, 21, 21, 5, 0).unwrap());
}

#[test]
fn forward_daeun_for_yang_year_male() {
    // Next jie (芒種) is about 21.7 days after birth.
    let profile = builder(false).build(&seoul_birth(Some(Gender::Male))).unwrap();
    assert_eq!(profile.daeun_cycles.len(), 8);
    let first = profile.daeun_cycles[0];
    assert_eq!(first.start_age, 7);
    assert_eq!(first.end_age, 17);
    assert_eq!(first.pillar().unwrap().to_string(), "壬午");
    assert_eq!(profile.daeun_cycles[1].pillar().unwrap().to_string(), "癸未");
    assert!(profile.daeun_is_well_formed());
}

#[test]
fn backward_daeun_for_yang_year_female() {
    // Previous jie (立夏) is about 9.5 days before birth.
    let profile = builder(false).build(&seoul_birth(Some(Gender::Female))).unwrap();
    let first = profile.daeun_cycles[0];
    assert_eq!(first.start_age, 3);
    assert_eq!(first.pillar().unwrap().to_string(), "庚辰");
    assert_eq!(profile.daeun_cycles[7].end_age, 83);
    assert!(profile.daeun_is_well_formed());
}

#[test]
fn daeun_lookup_by_date() {
    let profile = builder(false).build(&seoul_birth(Some(Gender::Male))).unwrap();
    let at_30 = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
    assert_eq!(profile.daeun_on(at_30).unwrap().start_age, 27);
    let infant = NaiveDate::from_ymd_opt(1991, 1, 1).unwrap();
    assert!(profile.daeun_on(infant).is_none());
}

#[test]
fn yongsin_supplied_or_estimated() {
    let mut birth = seoul_birth(None);
    birth.yongsin = Some(Element::Water);
    assert_eq!(builder(false).build(&birth).unwrap().yongsin, Some(Element::Water));
    assert_eq!(builder(true).build(&birth).unwrap().yongsin, Some(Element::Water));

    // Balanced chart counts as weak: the feeding element is favoured.
    let estimated = builder(true).build(&seoul_birth(None)).unwrap();
    assert_eq!(estimated.yongsin, Some(Element::Earth));
}

#[test]
fn invalid_birth_data_is_rejected() {
    let mut birth = seoul_birth(None);
    birth.latitude = 91.0;
    assert!(matches!(
        builder(false).build(&birth),
        Err(EngineError::InvalidInput { field: "latitude", .. })
    ));

    let mut birth = seoul_birth(None);
    birth.timezone = Some("Mars/Olympus".to_string());
    assert!(matches!(builder(false).build(&birth), Err(EngineError::Chart(_))));
}

#[test]
fn natal_energy_flow() {
    let profile = builder(false).build(&seoul_birth(None)).unwrap();
    let report = EnergyFlowAnalyzer::analyze(&profile.pillars);

    // 庚 is rooted only through the 庚 hidden in 巳.
    assert!(report.tonggeun);
    assert_eq!(report.tonggeun_evidence.len(), 1);
    assert_eq!(report.tonggeun_evidence[0].position, PillarPosition::Month);
    assert_eq!(report.tonggeun_evidence[0].kind, EvidenceKind::HiddenStem);

    // Exposed through 庚 (year) and 辛 (month).
    assert!(report.tuechul);
    assert_eq!(report.tuechul_evidence.len(), 2);
    assert!(report.is_strong());
    assert_eq!(report.modifier(), 5.0);
}
