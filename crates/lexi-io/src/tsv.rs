use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use lexi_types::WordRecord;

/// One `word<TAB>ipa` line per record, in the given order
pub fn write_tsv<W: Write>(mut writer: W, records: &[WordRecord]) -> std::io::Result<()> {
    for record in records {
        // Written by hand, not with csv: aligners such as MFA expect unquoted fields
        writeln!(writer, "{}", record.to_tsv_line())?;
    }
    writer.flush()
}

pub fn save_tsv(path: &Path, records: &[WordRecord]) -> std::io::Result<()> {
    let file = File::create(path)?;
    write_tsv(BufWriter::new(file), records)?;
    tracing::info!("Saved {} transcriptions to {}", records.len(), path.display());
    Ok(())
}
