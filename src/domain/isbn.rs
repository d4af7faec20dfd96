const MIN_BARCODE_DIGITS: usize = 8;
const MAX_BARCODE_DIGITS: usize = 13;

/// Whether a decoded barcode looks like a book code worth resolving
/// (EAN-13, EAN-8, UPC-A or a bare ISBN-10/13): 8 to 13 ASCII digits.
pub fn is_scannable_barcode(code: &str) -> bool {
    (MIN_BARCODE_DIGITS..=MAX_BARCODE_DIGITS).contains(&code.len())
        && code.bytes().all(|b| b.is_ascii_digit())
}

/// Pick the preferred identifier from a list: the first 13-digit one, else the first entry.
pub fn preferred_isbn<'a, I>(isbns: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut first = None;
    for isbn in isbns {
        if isbn.len() == 13 {
            return Some(isbn);
        }
        if first.is_none() && !isbn.is_empty() {
            first = Some(isbn);
        }
    }
    first
}
