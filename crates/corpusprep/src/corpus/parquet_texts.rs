//! # Parquet Corpus Loader

use std::{fs::File, path::Path};

use arrow::array::{Array, LargeStringArray, StringArray};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::{
    corpus::{Corpus, MemoryCorpus, loaders::load_error},
    errors::PrepResult,
};

/// Read the string column `text_column` of a parquet file into `corpus`.
///
/// Every record batch of every row group is read, in file order.
/// Null entries are skipped.
///
/// # Returns
/// The number of documents appended to `corpus`.
pub fn read_parquet_texts<P: AsRef<Path>>(
    path: P,
    text_column: &str,
    corpus: &mut MemoryCorpus,
) -> PrepResult<usize> {
    let path = path.as_ref();
    let source_name = path.display().to_string();

    let file = File::open(path).map_err(|e| load_error(&source_name, e))?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .and_then(|builder| builder.build())
        .map_err(|e| load_error(&source_name, e))?;

    let start = corpus.len();
    let mut nulls = 0;
    for batch in reader {
        let batch = batch.map_err(|e| load_error(&source_name, e))?;

        let column = batch.column_by_name(text_column).ok_or_else(|| {
            load_error(
                &source_name,
                format!("failed to find {text_column:?} column in batch"),
            )
        })?;

        nulls += column.null_count();
        if let Some(texts) = column.as_any().downcast_ref::<StringArray>() {
            corpus.extend(texts.iter().flatten());
        } else if let Some(texts) = column.as_any().downcast_ref::<LargeStringArray>() {
            corpus.extend(texts.iter().flatten());
        } else {
            return Err(load_error(
                &source_name,
                format!(
                    "column {text_column:?} has type {}, expected a string column",
                    column.data_type()
                ),
            ));
        }
    }

    if nulls > 0 {
        log::warn!("{source_name}: skipped {nulls} null {text_column:?} entries");
    }

    Ok(corpus.len() - start)
}
