use bank::models::Passbook;
use bank::Result;

use csv::Writer;

pub fn build_csv_writer() -> Writer<Vec<u8>> {
    return Writer::from_writer(vec![]);
}

pub fn write_to_string(writer: Writer<Vec<u8>>) -> Result<String> {
    let utf8 = writer.into_inner()?;
    let string = String::from_utf8(utf8)?;
    return Ok(string);
}

const PASSBOOK_HEADER: [&str; 4] = ["timestamp", "kind", "amount", "balance"];

/// Serializes passbook entries as CSV. The header is written even when there are no entries.
pub fn passbook_to_csv(passbook: Passbook) -> Result<String> {
    let mut wtr = build_csv_writer();
    let mut written = 0;

    for tx in passbook {
        log::debug!("Serializing transaction: {tx:?}");
        wtr.serialize(tx)?;
        written += 1;
    }

    if written == 0 {
        wtr.write_record(PASSBOOK_HEADER)?;
    }

    return write_to_string(wtr);
}
