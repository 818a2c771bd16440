//! The read-only catalog of sorting algorithms the visualizer knows about.
//!
//! Every [`SortingAlgorithm`] maps to exactly one [`AlgorithmInfo`]. The mapping is an exhaustive
//! `match`, so a new variant does not compile until its catalog entry is written.
//!
//! # Example
//!
//! ```
//! use orst_schema::SortingAlgorithm;
//!
//! let info = SortingAlgorithm::Counting.info();
//! assert_eq!(info.time_complexity, "O(n + k)");
//! assert_eq!(info.space_complexity, "O(k)");
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use clap::ValueEnum;
use colored::Colorize;
use prettytable::{row, Table};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One of the fourteen sorting algorithms a session can run.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SortingAlgorithm {
    Bubble,
    Quick,
    Merge,
    Insertion,
    Selection,
    Heap,
    Shell,
    Cocktail,
    Gnome,
    Comb,
    Cycle,
    Pancake,
    Counting,
    Radix,
}

/// Descriptive metadata for a single algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmInfo {
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
}

/// An algorithm together with its catalog text, as printed by `orst catalog --json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: SortingAlgorithm,
    #[serde(flatten)]
    pub info: &'static AlgorithmInfo,
}

impl From<SortingAlgorithm> for CatalogEntry {
    fn from(id: SortingAlgorithm) -> Self {
        Self {
            id,
            info: id.info(),
        }
    }
}

impl SortingAlgorithm {
    /// Every algorithm, in catalog order.
    pub const ALL: [SortingAlgorithm; 14] = [
        SortingAlgorithm::Bubble,
        SortingAlgorithm::Quick,
        SortingAlgorithm::Merge,
        SortingAlgorithm::Insertion,
        SortingAlgorithm::Selection,
        SortingAlgorithm::Heap,
        SortingAlgorithm::Shell,
        SortingAlgorithm::Cocktail,
        SortingAlgorithm::Gnome,
        SortingAlgorithm::Comb,
        SortingAlgorithm::Cycle,
        SortingAlgorithm::Pancake,
        SortingAlgorithm::Counting,
        SortingAlgorithm::Radix,
    ];

    /// The identifiers accepted by [`FromStr`], in catalog order.
    pub const IDENTIFIERS: [&'static str; 14] = [
        "bubble",
        "quick",
        "merge",
        "insertion",
        "selection",
        "heap",
        "shell",
        "cocktail",
        "gnome",
        "comb",
        "cycle",
        "pancake",
        "counting",
        "radix",
    ];

    /// The identifier used on the wire, e.g. `"quick"`.
    pub fn as_str(self) -> &'static str {
        Self::IDENTIFIERS[self as usize]
    }

    /// A human readable label, e.g. `"Quick Sort"`.
    pub fn name(self) -> &'static str {
        match self {
            SortingAlgorithm::Bubble => "Bubble Sort",
            SortingAlgorithm::Quick => "Quick Sort",
            SortingAlgorithm::Merge => "Merge Sort",
            SortingAlgorithm::Insertion => "Insertion Sort",
            SortingAlgorithm::Selection => "Selection Sort",
            SortingAlgorithm::Heap => "Heap Sort",
            SortingAlgorithm::Shell => "Shell Sort",
            SortingAlgorithm::Cocktail => "Cocktail Shaker Sort",
            SortingAlgorithm::Gnome => "Gnome Sort",
            SortingAlgorithm::Comb => "Comb Sort",
            SortingAlgorithm::Cycle => "Cycle Sort",
            SortingAlgorithm::Pancake => "Pancake Sort",
            SortingAlgorithm::Counting => "Counting Sort",
            SortingAlgorithm::Radix => "Radix Sort",
        }
    }

    /// Looks up the catalog entry for this algorithm.
    ///
    /// ```
    /// use orst_schema::SortingAlgorithm;
    ///
    /// let quick = SortingAlgorithm::Quick.info();
    /// assert!(quick.description.contains("pivot"));
    /// assert_eq!(quick.time_complexity, "O(n log n)");
    /// assert_eq!(quick.space_complexity, "O(log n)");
    /// ```
    pub fn info(self) -> &'static AlgorithmInfo {
        match self {
            SortingAlgorithm::Bubble => &AlgorithmInfo {
                description: "A simple sorting algorithm that repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Quick => &AlgorithmInfo {
                description: "A divide-and-conquer algorithm that works by selecting a 'pivot' element and partitioning the array around it.",
                time_complexity: "O(n log n)",
                space_complexity: "O(log n)",
            },
            SortingAlgorithm::Merge => &AlgorithmInfo {
                description: "A divide-and-conquer algorithm that divides the array into smaller subarrays, sorts them, and then merges them.",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
            },
            SortingAlgorithm::Insertion => &AlgorithmInfo {
                description: "Builds the final sorted array one item at a time by repeatedly inserting a new element into the sorted portion of the array.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Selection => &AlgorithmInfo {
                description: "Divides the input list into a sorted and an unsorted region, and repeatedly selects the smallest element from the unsorted region.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Heap => &AlgorithmInfo {
                description: "Uses a binary heap data structure to sort elements by repeatedly extracting the maximum element.",
                time_complexity: "O(n log n)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Shell => &AlgorithmInfo {
                description: "An optimization of insertion sort that allows the exchange of items that are far apart, progressively reducing the gap between elements to be compared.",
                time_complexity: "O(n log n) ~ O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Cocktail => &AlgorithmInfo {
                description: "A variation of bubble sort that sorts bidirectionally, bubbling both the largest and smallest values in each pass.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Gnome => &AlgorithmInfo {
                description: "A simple sorting algorithm similar to insertion sort, but moving elements to their proper position by a series of swaps.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Comb => &AlgorithmInfo {
                description: "An improvement over bubble sort that eliminates turtles (small values near the end) effectively.",
                time_complexity: "O(n² / 2^p)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Cycle => &AlgorithmInfo {
                description: "An in-place sorting algorithm that minimizes memory writes by cycling through arrays to make the minimum number of moves.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Pancake => &AlgorithmInfo {
                description: "Sorts by repeatedly flipping the prefix of the array (like flipping pancakes) until the array is sorted.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            SortingAlgorithm::Counting => &AlgorithmInfo {
                description: "An integer sorting algorithm that works by counting the number of objects having distinct key values, then calculating their positions.",
                time_complexity: "O(n + k)",
                space_complexity: "O(k)",
            },
            SortingAlgorithm::Radix => &AlgorithmInfo {
                description: "Sorts integers by processing each digit position, starting from the least significant digit to the most significant digit.",
                time_complexity: "O(d * (n + k))",
                space_complexity: "O(n + k)",
            },
        }
    }
}

impl Display for SortingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortingAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::IDENTIFIERS
            .iter()
            .position(|id| *id == s)
            .map(|i| Self::ALL[i])
            .ok_or_else(|| Error::InvalidIdentifier(s.to_string()))
    }
}

impl TryFrom<String> for SortingAlgorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// Iterates over the whole catalog in declaration order.
///
/// ```
/// use orst_schema::catalog;
///
/// assert_eq!(catalog::catalog().count(), 14);
/// ```
pub fn catalog() -> impl Iterator<Item = (SortingAlgorithm, &'static AlgorithmInfo)> {
    SortingAlgorithm::ALL.into_iter().map(|algo| (algo, algo.info()))
}

/// Prints the given algorithms as a table on stdout.
pub fn print_catalog<I>(algorithms: I)
where
    I: IntoIterator<Item = SortingAlgorithm>,
{
    let mut table = Table::new();
    table.add_row(row![
        "Algorithm".bold(),
        "Time".bold(),
        "Space".bold(),
        "Description".bold()
    ]);

    for algo in algorithms {
        let info = algo.info();
        table.add_row(row![
            algo.name().cyan(),
            info.time_complexity,
            info.space_complexity,
            wrap(info.description, 60)
        ]);
    }

    table.printstd();
}

// Breaks `text` on whitespace so that no line is wider than `width` (unless a single word is).
fn wrap(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len > 0 && line_len + 1 + word.chars().count() > width {
            out.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word.chars().count();
    }

    out
}
