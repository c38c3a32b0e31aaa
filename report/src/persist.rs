use crate::errors::Result;
use doegen_sampling::SampleTable;
use linfa::Float;
use ndarray::Array2;
use ndarray_csv::Array2Reader;
use std::fs::File;
use std::path::Path;

/// Writes `table` as a CSV file: a header row with the factor names in
/// declaration order, then one comma-separated row per sample. UTF-8, no
/// index column.
pub fn save_table<F: Float>(table: &SampleTable<F>, path: impl AsRef<Path>) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.column_names())?;
    for row in table.values().rows() {
        writer.write_record(row.iter().map(|v| v.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a CSV file written by [`save_table`] back into a table.
pub fn load_table(path: impl AsRef<Path>) -> Result<SampleTable<f64>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);
    let names: Vec<String> = reader.headers()?.iter().map(|n| n.to_string()).collect();
    let values: Array2<f64> = reader.deserialize_array2_dynamic()?;
    Ok(SampleTable::new(names, values)?)
}
