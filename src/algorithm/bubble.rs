//! Instrumented bubble sort
//!
//! [`generate_steps`] runs an optimized bubble sort to completion and records
//! a [`StepRecord`] for every comparison, swap and finished pass. The whole run
//! is materialized up front so playback can move backward without
//! recomputing anything.
//!
//! Comparisons use strict `>`, so equal neighbours are never swapped and the
//! sort is stable. A pass that performs no swaps ends the run early.

use super::step::{Highlight, StepLabel, StepRecord};

/// Indices fixed after `passes` completed passes, from the tail inward
fn tail_indices(n: usize, passes: usize) -> Vec<usize> {
    (0..passes).map(|k| n - 1 - k).collect()
}

fn format_array(arr: &[i64]) -> String {
    let items: Vec<String> = arr.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn done_record(arr: &[i64], description: &str) -> StepRecord {
    StepRecord {
        array: arr.to_vec(),
        highlight: Highlight::None,
        sorted: (0..arr.len()).collect(),
        current: None,
        label: StepLabel::Done,
        title: "Sorting completed!".to_string(),
        description: description.to_string(),
    }
}

/// Generate the full step sequence for sorting `input` in ascending order.
///
/// Always ends with exactly one [`StepLabel::Done`] record whose `sorted`
/// covers every index. Inputs with fewer than two elements produce only that
/// record.
pub fn generate_steps(input: &[i64]) -> Vec<StepRecord> {
    let mut arr = input.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;
        let sorted = tail_indices(n, i);

        for j in 0..n - 1 - i {
            let (a, b) = (arr[j], arr[j + 1]);
            let out_of_order = a > b;

            steps.push(StepRecord {
                array: arr.clone(),
                highlight: Highlight::Comparing(j, j + 1),
                sorted: sorted.clone(),
                current: Some(j),
                label: StepLabel::Comparing,
                title: format!("Comparing elements at positions {} and {}", j, j + 1),
                description: if out_of_order {
                    format!("Comparing {} and {}. They are out of order, will swap.", a, b)
                } else {
                    format!("Comparing {} and {}. They are in correct order.", a, b)
                },
            });

            if out_of_order {
                steps.push(StepRecord {
                    array: arr.clone(),
                    highlight: Highlight::Swapping(j, j + 1),
                    sorted: sorted.clone(),
                    current: Some(j),
                    label: StepLabel::Swapping,
                    title: format!("Swapping elements at positions {} and {}", j, j + 1),
                    description: format!("Swapping {} and {} because {} > {}", a, b, a, b),
                });

                arr.swap(j, j + 1);
                swapped = true;

                steps.push(StepRecord {
                    array: arr.clone(),
                    highlight: Highlight::None,
                    sorted: sorted.clone(),
                    current: Some(j + 1),
                    label: StepLabel::Swapped,
                    title: "Swapped elements".to_string(),
                    description: format!("Elements swapped. Array is now: {}", format_array(&arr)),
                });
            }
        }

        steps.push(StepRecord {
            array: arr.clone(),
            highlight: Highlight::None,
            sorted: tail_indices(n, i + 1),
            current: None,
            label: StepLabel::PassComplete,
            title: format!("Pass {} completed", i + 1),
            description: format!(
                "Pass {} completed. Element {} is now in its correct position.",
                i + 1,
                arr[n - 1 - i]
            ),
        });

        if !swapped {
            steps.push(done_record(
                &arr,
                "No swaps were made in this pass. The array is now completely sorted!",
            ));
            return steps;
        }
    }

    steps.push(done_record(
        &arr,
        "Bubble sort algorithm has finished. All elements are now in their correct positions.",
    ));
    steps
}
