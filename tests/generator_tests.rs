// Integration tests for step generation

use bubbletty::algorithm::{generate_steps, Highlight, RunStats, StepLabel, StepRecord};
use proptest::prelude::*;

fn is_done(step: &StepRecord) -> bool {
    step.label == StepLabel::Done
}

#[test]
fn test_example_five_three_eight_one() {
    let steps = generate_steps(&[5, 3, 8, 1]);

    assert_eq!(steps.last().unwrap().array, vec![1, 3, 5, 8]);
    assert_eq!(steps[0].comparing(), Some((0, 1)));

    // First pass: the swap of {0,1} comes before anything touching {2,3}
    let swap_01 = steps
        .iter()
        .position(|s| s.swapping() == Some((0, 1)))
        .expect("swap of 0 and 1");
    let first_23 = steps
        .iter()
        .position(|s| s.comparing() == Some((2, 3)) || s.swapping() == Some((2, 3)))
        .expect("comparison of 2 and 3");
    assert!(swap_01 < first_23);
}

#[test]
fn test_equal_values_never_swap() {
    let steps = generate_steps(&[2, 2, 1]);
    assert!(steps
        .iter()
        .filter_map(|s| s.swapping().map(|(a, b)| (s.array[a], s.array[b])))
        .all(|(left, right)| left > right));
    // The first comparison is between the two 2s and is not followed by a swap
    assert_eq!(steps[0].comparing(), Some((0, 1)));
    assert_eq!(steps[1].label, StepLabel::Comparing);
    assert_eq!(steps.last().unwrap().array, vec![1, 2, 2]);
}

#[test]
fn test_already_sorted_runs_one_pass() {
    let input: Vec<i64> = (1..=6).collect();
    let steps = generate_steps(&input);
    let stats = RunStats::from_steps(&steps);

    assert_eq!(stats.comparisons, 5);
    assert_eq!(stats.swaps, 0);
    assert_eq!(stats.passes, 1);
    assert_eq!(steps.len(), 5 + 2);
    assert!(is_done(steps.last().unwrap()));
}

#[test]
fn test_reverse_sorted_runs_every_pass() {
    let steps = generate_steps(&[5, 4, 3, 2, 1]);
    let stats = RunStats::from_steps(&steps);

    assert_eq!(stats.comparisons, 10);
    assert_eq!(stats.swaps, 10);
    assert_eq!(stats.passes, 4);
    assert_eq!(steps.iter().filter(|s| is_done(s)).count(), 1);
    assert_eq!(
        steps.last().unwrap().description,
        "Bubble sort algorithm has finished. All elements are now in their correct positions."
    );
}

#[test]
fn test_pass_complete_names_fixed_value() {
    let steps = generate_steps(&[3, 9, 1]);
    let pass = steps
        .iter()
        .find(|s| s.label == StepLabel::PassComplete)
        .unwrap();
    assert_eq!(pass.title, "Pass 1 completed");
    assert_eq!(
        pass.description,
        "Pass 1 completed. Element 9 is now in its correct position."
    );
    assert_eq!(pass.sorted, vec![2]);
    assert_eq!(pass.current, None);
}

#[test]
fn test_swapping_record_shows_pre_swap_array() {
    let steps = generate_steps(&[4, 1]);
    assert_eq!(steps[1].highlight, Highlight::Swapping(0, 1));
    assert_eq!(steps[1].array, vec![4, 1]);
    assert_eq!(steps[1].description, "Swapping 4 and 1 because 4 > 1");
    assert_eq!(steps[2].array, vec![1, 4]);
}

proptest! {
    #[test]
    fn prop_final_record_is_done_and_sorted(input in prop::collection::vec(-50i64..50, 0..30)) {
        let steps = generate_steps(&input);
        let last = steps.last().unwrap();

        let mut expected = input.clone();
        expected.sort();

        prop_assert!(is_done(last));
        prop_assert_eq!(&last.array, &expected);
        prop_assert_eq!(last.sorted.len(), input.len());
        prop_assert_eq!(steps.iter().filter(|s| is_done(s)).count(), 1);
    }

    #[test]
    fn prop_sorted_indices_only_grow(input in prop::collection::vec(0i64..20, 0..25)) {
        let steps = generate_steps(&input);
        for pair in steps.windows(2) {
            prop_assert!(pair[0].sorted.len() <= pair[1].sorted.len());
            for index in &pair[0].sorted {
                prop_assert!(pair[1].sorted.contains(index));
            }
        }
    }

    #[test]
    fn prop_trace_is_adjacent_swaps(input in prop::collection::vec(0i64..100, 1..25)) {
        let steps = generate_steps(&input);
        let mut previous = input.clone();
        for step in &steps {
            if step.array != previous {
                // Only a swapped record changes the array, by one adjacent swap
                prop_assert_eq!(step.label, StepLabel::Swapped);
                let j = step.current.unwrap() - 1;
                let mut expected = previous.clone();
                expected.swap(j, j + 1);
                prop_assert_eq!(&step.array, &expected);
                prop_assert!(previous[j] > previous[j + 1]);
            }
            previous = step.array.clone();
        }
    }

    #[test]
    fn prop_sort_is_stable(keys in prop::collection::vec(0i64..5, 0..20)) {
        // Tag each key with its original position and track the tags through the swaps
        let steps = generate_steps(&keys);
        let mut tagged: Vec<(i64, usize)> = keys.iter().copied().zip(0..).collect();
        for step in &steps {
            if let Some((a, b)) = step.swapping() {
                prop_assert!(step.array[a] > step.array[b]);
                tagged.swap(a, b);
            }
        }
        let mut expected: Vec<(i64, usize)> = keys.iter().copied().zip(0..).collect();
        expected.sort_by_key(|&(k, _)| k);
        prop_assert_eq!(tagged, expected);
    }

    #[test]
    fn prop_sorted_input_exits_after_one_pass(mut input in prop::collection::vec(0i64..100, 2..30)) {
        input.sort();
        let steps = generate_steps(&input);
        let stats = RunStats::from_steps(&steps);
        prop_assert_eq!(stats.comparisons, input.len() - 1);
        prop_assert_eq!(stats.swaps, 0);
        prop_assert_eq!(stats.passes, 1);
    }
}
