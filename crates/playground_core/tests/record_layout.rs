use binary_playground_core::model::record::NUMERIC_RECORD_ALIGN;
use binary_playground_core::NumericRecord;
use std::mem::{align_of, offset_of, size_of};

#[test]
fn record_layout_matches_c_struct() {
    assert_eq!(size_of::<NumericRecord>(), 16);
    assert_eq!(align_of::<NumericRecord>(), align_of::<f64>());
    assert_eq!(NUMERIC_RECORD_ALIGN, align_of::<f64>());
    assert_eq!(offset_of!(NumericRecord, x), 0);
    assert_eq!(offset_of!(NumericRecord, y), 4);
    assert_eq!(offset_of!(NumericRecord, z), 8);
}

#[test]
fn record_serialization_uses_field_names() {
    let record = NumericRecord::new(5, 4.0, 4.0);
    let json = serde_json::to_value(record).expect("record should serialize");
    assert_eq!(json["x"], 5);
    assert_eq!(json["y"], 4.0);
    assert_eq!(json["z"], 4.0);

    let decoded: NumericRecord = serde_json::from_value(json).expect("record should decode");
    assert_eq!(decoded, record);
}
