use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_intents_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["action", "product", "key", "value"])?;

    for _ in 0..rows {
        wtr.write_record(["add", "101", "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}
