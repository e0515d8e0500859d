#![allow(missing_docs)]

use std::{collections::BTreeSet, fs, path::Path};

use corpusprep::{
    corpus::{Corpus, CorpusSource, MemoryCorpus},
    errors::{CorpusPrepError, Stage},
    pipeline::{PrepareOptions, PrepareReport, prepare_corpus, prepare_source},
    progress::{LogProgress, NoProgress},
    split::{SplitOptions, split_corpus},
    vocab::{extract_char_vocab, load_char_vocab_path},
};
use proptest::prelude::*;
use tempdir::TempDir;

const SCENARIO: &[&str] = &[
    "abc", "bca", "xyz", "", "a", "bbb", "ccc", "zzz", "qqq", "www",
];

fn options_in(dir: &Path) -> PrepareOptions {
    let path = |name: &str| dir.join(name).to_string_lossy().to_string();
    PrepareOptions::default()
        .with_vocab_path(path("character_vocab.txt"))
        .with_train_path(path("train.txt"))
        .with_val_path(path("val.txt"))
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .split_terminator('\n')
        .map(str::to_string)
        .collect()
}

#[test]
fn scenario_end_to_end() {
    let tmpdir = TempDir::new("corpusprep-e2e").unwrap();
    let corpus: MemoryCorpus = SCENARIO.iter().copied().collect();
    let options =
        options_in(tmpdir.path()).with_split(SplitOptions::default().with_seed(Some(42)));

    let report = prepare_corpus(&corpus, &options, &LogProgress::default()).unwrap();
    assert_eq!(
        report,
        PrepareReport {
            vocab_size: 8,
            train_documents: 9,
            validation_documents: 1,
        }
    );

    let vocab = load_char_vocab_path(tmpdir.path().join("character_vocab.txt")).unwrap();
    assert_eq!(vocab.chars(), &['a', 'b', 'c', 'q', 'w', 'x', 'y', 'z']);

    let train = read_lines(&tmpdir.path().join("train.txt"));
    let val = read_lines(&tmpdir.path().join("val.txt"));
    assert_eq!(train.len(), 9);
    assert_eq!(val.len(), 1);

    // Same seed, same split.
    let rerun = TempDir::new("corpusprep-e2e").unwrap();
    let options = options_in(rerun.path()).with_split(SplitOptions::default().with_seed(Some(42)));
    prepare_corpus(&corpus, &options, &NoProgress).unwrap();
    assert_eq!(read_lines(&rerun.path().join("train.txt")), train);
    assert_eq!(read_lines(&rerun.path().join("val.txt")), val);
}

#[test]
fn empty_corpus_scenario() {
    let tmpdir = TempDir::new("corpusprep-e2e").unwrap();
    let corpus = MemoryCorpus::new();

    let vocab = extract_char_vocab(&corpus, &NoProgress).unwrap();
    assert!(vocab.is_empty());

    let err = split_corpus(&corpus, &SplitOptions::default()).unwrap_err();
    assert!(matches!(err, CorpusPrepError::Partition(_)));

    let err = prepare_corpus(&corpus, &options_in(tmpdir.path()), &NoProgress).unwrap_err();
    assert!(matches!(
        err,
        CorpusPrepError::Stage {
            stage: Stage::Split,
            ..
        }
    ));
    assert_eq!(fs::read_dir(tmpdir.path()).unwrap().count(), 0);
}

#[test]
fn prepare_from_files() {
    let tmpdir = TempDir::new("corpusprep-e2e").unwrap();
    let text_path = tmpdir.path().join("part1.txt");
    let jsonl_path = tmpdir.path().join("part2.jsonl");
    fs::write(&text_path, "hello\r\nworld\n\n").unwrap();
    fs::write(
        &jsonl_path,
        "{\"text\": \"caf\\u00e9\"}\n\n{\"text\": \"tab\\there\", \"id\": 3}\n",
    )
    .unwrap();

    let out = tmpdir.path().join("out");
    fs::create_dir(&out).unwrap();

    let source = CorpusSource::new([
        text_path.to_string_lossy().to_string(),
        jsonl_path.to_string_lossy().to_string(),
    ]);
    let options = options_in(&out)
        .with_split(
            SplitOptions::default()
                .with_holdout_fraction(0.2)
                .with_seed(Some(7)),
        )
        .with_parallel(false);

    let report = prepare_source(&source, &options, &NoProgress).unwrap();
    assert_eq!(report.train_documents, 4);
    assert_eq!(report.validation_documents, 1);

    let vocab = load_char_vocab_path(out.join("character_vocab.txt")).unwrap();
    let expected: BTreeSet<char> = "helloworldcaf\u{e9}tab\there".chars().collect();
    assert_eq!(vocab.iter().collect::<BTreeSet<_>>(), expected);

    let mut lines = read_lines(&out.join("train.txt"));
    lines.extend(read_lines(&out.join("val.txt")));
    lines.sort();
    assert_eq!(lines, ["", "caf\u{e9}", "hello", "tab\there", "world"]);
}

#[test]
fn unwritable_vocab_path_is_tagged() {
    let tmpdir = TempDir::new("corpusprep-e2e").unwrap();
    let corpus: MemoryCorpus = SCENARIO.iter().copied().collect();
    let options = options_in(tmpdir.path()).with_vocab_path(
        tmpdir
            .path()
            .join("missing/character_vocab.txt")
            .to_string_lossy()
            .to_string(),
    );

    let err = prepare_corpus(&corpus, &options, &NoProgress).unwrap_err();
    assert!(matches!(
        err,
        CorpusPrepError::Stage {
            stage: Stage::Vocabulary,
            ..
        }
    ));
    assert!(matches!(err.root(), CorpusPrepError::Io { .. }));
    assert!(!tmpdir.path().join("train.txt").exists());
}

// -------------------------------------------------------------------
// Property tests
// -------------------------------------------------------------------

fn documents() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[^\\n\\r]{0,24}", 2..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn vocab_is_complete_and_minimal(docs in proptest::collection::vec("\\PC{0,32}", 0..64)) {
        let corpus: MemoryCorpus = docs.iter().map(String::as_str).collect();
        let vocab = extract_char_vocab(&corpus, &NoProgress).unwrap();

        let expected: BTreeSet<char> = docs.iter().flat_map(|d| d.chars()).collect();
        prop_assert_eq!(vocab.iter().collect::<BTreeSet<_>>(), expected);
        prop_assert!(vocab.chars().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn split_is_disjoint_complete_and_proportional(
        len in 2usize..500,
        fraction in 0.01f64..0.5,
        seed in any::<u64>(),
    ) {
        let expected = ((fraction * len as f64) - 1e-9).ceil().max(1.0) as usize;
        prop_assume!(expected < len);

        let corpus: MemoryCorpus = (0..len).map(|i| i.to_string()).collect();
        let options = SplitOptions::default()
            .with_holdout_fraction(fraction)
            .with_seed(Some(seed));
        let split = split_corpus(&corpus, &options).unwrap();

        prop_assert_eq!(split.validation().len(), expected);
        prop_assert_eq!(split.len(), corpus.len());

        let train: BTreeSet<usize> = split.train().iter().copied().collect();
        let validation: BTreeSet<usize> = split.validation().iter().copied().collect();
        prop_assert!(train.is_disjoint(&validation));
        prop_assert_eq!(train.len() + validation.len(), len);

        prop_assert_eq!(split_corpus(&corpus, &options).unwrap(), split);
    }

    #[test]
    fn artifacts_round_trip_documents(docs in documents(), seed in any::<u64>()) {
        let tmpdir = TempDir::new("corpusprep-prop").unwrap();
        let corpus: MemoryCorpus = docs.iter().map(String::as_str).collect();
        let options = options_in(tmpdir.path())
            .with_split(SplitOptions::default().with_seed(Some(seed)));

        prepare_corpus(&corpus, &options, &NoProgress).unwrap();

        let mut lines = read_lines(&tmpdir.path().join("train.txt"));
        lines.extend(read_lines(&tmpdir.path().join("val.txt")));
        lines.sort();

        let mut expected = docs.clone();
        expected.sort();
        prop_assert_eq!(lines, expected);
    }
}
