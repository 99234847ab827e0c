#![no_main]
use libfuzzer_sys::fuzz_target;
use variant_engine::analysis::DimensionAnalyzer;
use variant_engine::model::{VariantRecord, VariantSet};
use variant_engine::normalize::{normalize, normalize_value};

/// Any JSON array becomes records; normalization must be idempotent and
/// analysis must not panic.
fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    let items = match &value {
        serde_json::Value::Array(items) => items.clone(),
        other => vec![other.clone()],
    };
    let records: Vec<VariantRecord> = items.iter().map(VariantRecord::from_value).collect();

    for record in &records {
        let flat = normalize(record);
        assert_eq!(normalize(&flat.to_record(record.id.clone())), flat);
    }
    for item in &items {
        let flat = normalize_value(item);
        if let Ok(json) = serde_json::to_value(&flat) {
            assert_eq!(normalize_value(&json), flat);
        }
    }

    let set = VariantSet::build(&records);
    let _ = DimensionAnalyzer::default().analyze(&set, &[] as &[&str]);
});
