use tenstream::format::{self, DataType, HEADER_LENGTH, MAGIC, MAGIC_LENGTH};
use tenstream::sans::header::Header;

fn shape(dims: [u16; 4]) -> Header {
    Header {
        version: format::VERSION,
        dtype: DataType::Float32,
        dims,
    }
}

#[test]
fn header_length_matches_wire_layout() {
    // Marker, version, element type, four 16-bit dimensions, end-of-header.
    assert_eq!(HEADER_LENGTH, 19);
    assert_eq!(MAGIC.len(), MAGIC_LENGTH);
}

#[test]
fn scalars_decode_most_significant_byte_first() {
    // Literal byte-order cases: the first byte of a field is its most
    // significant, for every scalar width.
    assert_eq!(format::read_u16([0x12, 0x34]), 0x1234);
    assert_eq!(format::read_u16([0x01, 0x00]), 256);
    assert_eq!(format::read_u16([0x00, 0x01]), 1);

    assert_eq!(format::read_i32([0x12, 0x34, 0x56, 0x78]), 0x12345678);
    assert_eq!(format::read_i32([0x80, 0x00, 0x00, 0x00]), i32::MIN);
    assert_eq!(format::read_i32([0xFF, 0xFF, 0xFF, 0xFF]), -1);
}

#[test]
fn f32_decode_is_a_bit_reinterpretation() {
    for value in [0.0_f32, 1.0, -1.0, 3.14, f32::INFINITY, f32::MIN_POSITIVE] {
        assert_eq!(format::read_f32(value.to_bits().to_be_bytes()), value);
    }

    assert_eq!(format::read_f32([0x3F, 0x80, 0x00, 0x00]), 1.0);
    assert!(format::read_f32([0x7F, 0xC0, 0x00, 0x00]).is_nan());
}

#[test]
fn data_type_from_byte() {
    assert_eq!(DataType::from_byte(0), DataType::Invalid);
    assert_eq!(DataType::from_byte(1), DataType::Float32);
    assert_eq!(DataType::from_byte(2), DataType::Int32);
    assert_eq!(DataType::from_byte(7), DataType::Invalid);
}

#[test]
fn rank_counts_the_non_zero_prefix() {
    assert_eq!(shape([0, 0, 0, 0]).rank(), 0);
    assert_eq!(shape([5, 0, 0, 0]).rank(), 1);
    assert_eq!(shape([5, 3, 0, 0]).rank(), 2);
    assert_eq!(shape([5, 3, 2, 0]).rank(), 3);
    assert_eq!(shape([5, 3, 2, 1]).rank(), 4);
}

#[test]
fn rank_of_a_holed_shape_is_undetermined() {
    assert_eq!(shape([0, 3, 0, 0]).rank(), 0);
    assert_eq!(shape([5, 0, 2, 0]).rank(), 0);
    assert_eq!(shape([5, 3, 0, 1]).rank(), 0);
}

#[test]
fn elements_is_the_product_of_the_prefix() {
    assert_eq!(shape([0, 0, 0, 0]).elements(), 0);
    assert_eq!(shape([5, 0, 0, 0]).elements(), 5);
    assert_eq!(shape([5, 3, 0, 0]).elements(), 15);
    assert_eq!(shape([5, 3, 2, 1]).elements(), 30);
    assert_eq!(shape([0, 3, 0, 0]).elements(), 0);
}

#[test]
fn coord_2d_maps_rows_and_columns() {
    let header = shape([4, 3, 0, 0]);

    assert_eq!(header.coord_2d(0), Some((0, 0)));
    assert_eq!(header.coord_2d(5), Some((1, 2)));
    assert_eq!(header.coord_2d(11), Some((3, 2)));
}

#[test]
fn coord_2d_fails_for_other_ranks() {
    assert_eq!(shape([4, 0, 0, 0]).coord_2d(0), None);
    assert_eq!(shape([4, 3, 2, 0]).coord_2d(0), None);
    assert_eq!(shape([0, 0, 0, 0]).coord_2d(0), None);
}

#[test]
fn coord_2d_does_not_bound_check() {
    // An out-of-range item silently produces an out-of-range row.
    assert_eq!(shape([4, 3, 0, 0]).coord_2d(100), Some((33, 1)));
}
