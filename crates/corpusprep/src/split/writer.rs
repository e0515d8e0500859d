//! # Partition Writers
//!
//! Each partition is written as newline-terminated documents, in partition
//! order. Empty documents are written as empty lines.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    corpus::Corpus,
    errors::{IoPathContext, PrepResult},
    io::{AtomicFile, ensure_distinct_destinations},
    progress::ProgressReporter,
    split::{CorpusSplit, Partition, SplitOptions, split_corpus},
};

const WRITE_LABEL: &str = "Writing partitions";

/// Streams the documents of one partition to a writer.
#[derive(Debug)]
pub struct PartitionWriter<W: Write> {
    dest: PathBuf,
    writer: W,
    written: usize,
}

impl<W: Write> PartitionWriter<W> {
    /// Wrap `writer`; `dest` names the destination in errors.
    pub fn new<P: AsRef<Path>>(
        dest: P,
        writer: W,
    ) -> Self {
        Self {
            dest: dest.as_ref().to_path_buf(),
            writer,
            written: 0,
        }
    }

    /// The number of documents written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Write one document, followed by `\n`.
    pub fn write_document(
        &mut self,
        text: &str,
    ) -> PrepResult<()> {
        self.writer.write_all(text.as_bytes()).with_path(&self.dest)?;
        self.writer.write_all(b"\n").with_path(&self.dest)?;
        self.written += 1;
        Ok(())
    }

    /// Write the documents at `indices`, in order.
    pub fn write_partition<C>(
        &mut self,
        corpus: &C,
        indices: &[usize],
        progress: &dyn ProgressReporter,
    ) -> PrepResult<()>
    where
        C: Corpus + ?Sized,
    {
        for &index in indices {
            let text = corpus.text(index)?;
            self.write_document(&text)?;
            progress.advance(1);
        }
        Ok(())
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Write both partitions of `split`.
///
/// Both files are fully written before either is moved into place; on
/// failure neither destination is touched. The two paths must name
/// different files, however they are spelled.
pub fn save_split<C, P, Q>(
    corpus: &C,
    split: &CorpusSplit,
    train_path: P,
    val_path: Q,
    progress: &dyn ProgressReporter,
) -> PrepResult<()>
where
    C: Corpus + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let train_path = train_path.as_ref();
    let val_path = val_path.as_ref();
    ensure_distinct_destinations(&[
        ("train", train_path),
        ("validation", val_path),
    ])?;

    progress.begin(WRITE_LABEL, split.len() as u64);

    let mut files = Vec::with_capacity(2);
    for (partition, path) in [
        (Partition::Train, train_path),
        (Partition::Validation, val_path),
    ] {
        let mut writer = PartitionWriter::new(path, AtomicFile::create(path)?);
        writer.write_partition(corpus, split.indices(partition), progress)?;
        log::debug!("{partition}: {} documents", writer.written());
        files.push(writer.into_inner());
    }

    progress.finish();

    for file in files {
        let path = file.path().to_path_buf();
        file.commit()?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

/// Split `corpus` and write both partitions.
pub fn split_and_save<C, P, Q>(
    corpus: &C,
    options: &SplitOptions,
    train_path: P,
    val_path: Q,
    progress: &dyn ProgressReporter,
) -> PrepResult<CorpusSplit>
where
    C: Corpus + ?Sized,
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let split = split_corpus(corpus, options)?;
    save_split(corpus, &split, train_path, val_path, progress)?;
    Ok(split)
}
