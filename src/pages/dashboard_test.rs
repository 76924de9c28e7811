use super::*;

#[test]
fn barcode_is_trimmed_before_search() {
    assert_eq!(validate_barcode("  3274080005003  "), Ok("3274080005003".to_owned()));
}

#[test]
fn empty_barcode_is_rejected() {
    assert_eq!(validate_barcode(""), Err("Please enter a barcode"));
    assert_eq!(validate_barcode("   "), Err("Please enter a barcode"));
}

#[test]
fn amounts_render_with_two_decimals() {
    assert_eq!(format_amount(250.0), "250.00");
    assert_eq!(format_amount(12.345), "12.35");
    assert_eq!(format_amount(0.0), "0.00");
}
