use std::collections::BTreeSet;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use qssedit_keywords as catalog;

/// How long [`CompletionIndex::prepare`] waits for the background worker
/// before giving up.
pub const PREPARE_TIMEOUT: Duration = Duration::from_secs(10);

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

#[derive(Debug, Error)]
pub enum PrepareError {
    #[error("completion index preparation timed out after {0:?}")]
    Timeout(Duration),
    #[error("completion index preparation worker exited without a result")]
    WorkerGone,
}

/// Flattened, deduplicated union of every catalog group.
/// （所有詞彙分組攤平去重後的聯集。）
///
/// Used purely for autocomplete suggestion; highlighting must keep
/// consulting the per-group membership through the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionIndex {
    words: Vec<String>,
}

impl CompletionIndex {
    /// Collects every catalog group into one sorted, deduplicated word list.
    /// （將所有詞彙分組彙整為單一排序去重的字詞清單。）
    ///
    /// The space-delimited sets are tokenized on whitespace before
    /// insertion. The result is deterministic for identical catalog
    /// content; order carries no meaning to the consumer.
    pub fn build() -> Self {
        let mut words = BTreeSet::new();

        for widget in catalog::WIDGET_TYPES {
            words.insert(*widget);
        }
        for set in [catalog::PROPERTIES, catalog::PSEUDO_STATES, catalog::SUB_CONTROLS] {
            for word in WHITESPACE.split(set).filter(|w| !w.is_empty()) {
                words.insert(word);
            }
        }
        for group in catalog::ENUM_VALUE_GROUPS {
            for value in *group {
                words.insert(*value);
            }
        }

        Self {
            words: words.into_iter().map(String::from).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|entry| entry.as_str().cmp(word)).is_ok()
    }

    /// Contiguous slice of entries starting with `prefix` (case-sensitive).
    pub fn matching(&self, prefix: &str) -> &[String] {
        let start = self.words.partition_point(|w| w.as_str() < prefix);
        let end = start
            + self.words[start..]
                .iter()
                .take_while(|w| w.starts_with(prefix))
                .count();
        &self.words[start..end]
    }

    /// Builds the case-folded lookup table on a background thread and
    /// blocks until it reports completion, with a bounded wait.
    /// （在背景執行緒建立查詢表，並以有界等待阻塞至完成。）
    ///
    /// Consumes the index: preparation happens at most once per lexer
    /// instance. The calling thread parks on the channel rather than
    /// polling, and a worker that finishes before the caller blocks is
    /// handled by the buffered one-shot channel.
    pub fn prepare(self) -> Result<PreparedIndex, PrepareError> {
        let (tx, rx) = mpsc::sync_channel(1);

        thread::spawn(move || {
            let prepared = PreparedIndex::assemble(self);
            // The receiver may already be gone after a timeout.
            let _ = tx.send(prepared);
        });

        match rx.recv_timeout(PREPARE_TIMEOUT) {
            Ok(prepared) => Ok(prepared),
            Err(mpsc::RecvTimeoutError::Timeout) => Err(PrepareError::Timeout(PREPARE_TIMEOUT)),
            Err(mpsc::RecvTimeoutError::Disconnected) => Err(PrepareError::WorkerGone),
        }
    }
}

/// Completion index with its case-insensitive lookup table built.
/// （已建立不分大小寫查詢表的補全索引。）
#[derive(Debug)]
pub struct PreparedIndex {
    index: CompletionIndex,
    // Lowercased keys, parallel to and sorted consistently with a
    // permutation of the display words.
    folded: Vec<(String, usize)>,
}

impl PreparedIndex {
    fn assemble(index: CompletionIndex) -> Self {
        let mut folded: Vec<(String, usize)> = index
            .words
            .iter()
            .enumerate()
            .map(|(position, word)| (word.to_lowercase(), position))
            .collect();
        folded.sort();
        Self { index, folded }
    }

    pub fn words(&self) -> &[String] {
        self.index.words()
    }

    pub fn index(&self) -> &CompletionIndex {
        &self.index
    }

    /// Case-insensitive prefix completion over the full vocabulary.
    /// （針對全部詞彙進行不分大小寫的前綴補全。）
    pub fn complete(&self, prefix: &str) -> Vec<&str> {
        let folded_prefix = prefix.to_lowercase();
        let start = self
            .folded
            .partition_point(|(key, _)| key.as_str() < folded_prefix.as_str());
        self.folded[start..]
            .iter()
            .take_while(|(key, _)| key.starts_with(&folded_prefix))
            .map(|(_, position)| self.index.words[*position].as_str())
            .collect()
    }
}
