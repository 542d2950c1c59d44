//! Checks against the data shipped with the crate.

use std::collections::HashSet;

use hcvn_data::{
    DataConfig, DivisionSource, ProvinceRegistry, iter_all_districts, iter_all_provinces,
    iter_all_wards, list_json_files,
};
use hcvn_model::{DivisionRecord, DivisionType, UnitKind};

#[test]
fn province_codes_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for province in iter_all_provinces().expect("load provinces") {
        assert!(!province.code().is_empty());
        assert!(seen.insert(province.code()), "duplicate {}", province.code());
    }
    assert_eq!(seen.len(), 63);
}

#[test]
fn provinces_follow_file_order() {
    let codes: Vec<_> = iter_all_provinces()
        .unwrap()
        .take(3)
        .map(|p| p.code())
        .collect();
    assert_eq!(codes, vec!["01", "02", "04"]);
}

#[test]
fn explicit_registry_matches_default() {
    let registry = ProvinceRegistry::load(&DataConfig::default()).unwrap();
    let from_default: Vec<_> = iter_all_provinces().unwrap().cloned().collect();
    assert_eq!(registry.provinces(), from_default.as_slice());

    let hanoi = registry.get("01").expect("Hà Nội");
    assert_eq!(hanoi.name(), "Hà Nội");
    assert_eq!(hanoi.kind(), Some(UnitKind::ThanhPho));
    assert_eq!(hanoi.to_string(), "Thành phố Hà Nội (01)");
}

#[test]
fn district_parent_codes_match_file_names() {
    let stems: HashSet<String> = list_json_files(&DataConfig::default().districts_path())
        .unwrap()
        .iter()
        .map(|p| p.file_stem().unwrap().to_string_lossy().into_owned())
        .collect();

    let registry = ProvinceRegistry::load(&DataConfig::default()).unwrap();
    for pair in iter_all_districts().unwrap() {
        let (province_code, district) = pair.unwrap();
        assert!(stems.contains(&province_code));
        assert!(registry.contains(&province_code));
        assert_eq!(district.parent_code(), Some(province_code.as_str()));
    }
}

#[test]
fn iteration_is_repeatable() {
    let first: Vec<_> = iter_all_districts().unwrap().map(Result::unwrap).collect();
    let second: Vec<_> = iter_all_districts().unwrap().map(Result::unwrap).collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);

    let first: Vec<_> = iter_all_wards().unwrap().map(Result::unwrap).collect();
    let second: Vec<_> = iter_all_wards().unwrap().map(Result::unwrap).collect();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn every_ward_parent_is_a_known_district() {
    let districts: HashSet<String> = iter_all_districts()
        .unwrap()
        .map(|pair| pair.unwrap().1.code().to_string())
        .collect();

    for pair in iter_all_wards().unwrap() {
        let (district_code, ward) = pair.unwrap();
        assert!(districts.contains(&district_code), "{district_code}");
        assert_eq!(ward.parent_code(), Some(district_code.as_str()));
    }
}

#[test]
fn lookups_by_parent() {
    let source = DivisionSource::bundled();

    let hanoi = source.districts_of("01").unwrap();
    let ba_dinh = hanoi.iter().find(|d| d.code() == "001").expect("Ba Đình");
    assert_eq!(ba_dinh.display_name(), "Quận Ba Đình");
    assert_eq!(ba_dinh.kind(), Some(UnitKind::Quan));

    let wards = source.wards_of("001").unwrap();
    assert_eq!(wards.first().map(|w| w.name()), Some("Phúc Xá"));
    assert_eq!(
        wards.first().and_then(|w| w.path()),
        Some("Phúc Xá, Ba Đình, Hà Nội")
    );

    assert!(source.districts_of("99").unwrap().is_empty());
}

#[test]
fn division_type_is_per_record_type() {
    assert_eq!(hcvn_model::Province::DIVISION_TYPE, DivisionType::Province);
    assert_eq!(hcvn_model::District::DIVISION_TYPE, DivisionType::District);
    assert_eq!(hcvn_model::Ward::DIVISION_TYPE, DivisionType::Ward);
}
