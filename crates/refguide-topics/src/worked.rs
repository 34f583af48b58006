//! Worked examples: mean, character frequencies, even filter.

use refguide_core::{EmitContext, Lines, Section, Topic, TopicError};
use std::collections::HashMap;

/// Sum and arithmetic mean, or `None` for an empty slice.
/// The sum is widened to `i64`, so no `i32` input can overflow it.
pub fn mean(values: &[i32]) -> Option<(i64, f64)> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    Some((sum, sum as f64 / values.len() as f64))
}

pub fn char_frequencies(word: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for c in word.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

pub fn even_numbers(values: &[i32]) -> Vec<i32> {
    values.iter().copied().filter(|n| n % 2 == 0).collect()
}

pub struct WorkedExamples;

impl Topic for WorkedExamples {
    fn id(&self) -> &'static str {
        "operations.worked_examples"
    }

    fn title(&self) -> &'static str {
        "11. PRACTICAL EXAMPLES"
    }

    fn build(&self, _ctx: &EmitContext) -> Result<Section, TopicError> {
        let scores = [85, 90, 78, 92, 88];
        let (sum, average) =
            mean(&scores).ok_or_else(|| TopicError::example("no scores to average"))?;

        let word = "programming";
        let mut frequencies: Vec<(char, usize)> = char_frequencies(word).into_iter().collect();
        frequencies.sort_unstable();
        let rendered: Vec<String> = frequencies
            .iter()
            .map(|(c, n)| format!("{}:{}", c, n))
            .collect();

        let all_nums: Vec<i32> = (1..=10).collect();
        let even_nums = even_numbers(&all_nums);

        Ok(Section::new(self.id(), self.title())
            .lines(
                Lines::titled("Example 1: Calculate Average of Numbers")
                    .line(format!("Scores: {:?}", scores))
                    .line(format!("Sum: {}, Average: {:.2}", sum, average)),
            )
            .lines(
                Lines::titled("Example 2: Count Character Frequencies")
                    .line(format!("Word: \"{}\"", word))
                    .line(format!(
                        "Character frequencies (sorted by character): {}",
                        rendered.join(" ")
                    )),
            )
            .lines(
                Lines::titled("Example 3: Filter Even Numbers")
                    .line(format!("All numbers: {:?}", all_nums))
                    .line(format!("Even numbers: {:?}", even_nums)),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_of_scores() {
        let (sum, average) = mean(&[85, 90, 78, 92, 88]).unwrap();
        assert_eq!(sum, 433);
        assert_eq!(format!("{:.2}", average), "86.60");
        assert!(mean(&[]).is_none());
    }

    #[test]
    fn test_mean_does_not_overflow() {
        let (sum, average) = mean(&[i32::MAX, 1]).unwrap();
        assert_eq!(sum, i64::from(i32::MAX) + 1);
        assert_eq!(average, 1_073_741_824.0);

        let (sum, _) = mean(&[i32::MIN, i32::MIN]).unwrap();
        assert_eq!(sum, 2 * i64::from(i32::MIN));
    }

    #[test]
    fn test_char_frequencies() {
        let counts = char_frequencies("programming");
        assert_eq!(counts.get(&'g'), Some(&2));
        assert_eq!(counts.get(&'r'), Some(&2));
        assert_eq!(counts.get(&'m'), Some(&2));
        assert_eq!(counts.get(&'p'), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), "programming".len());
    }

    #[test]
    fn test_even_filter() {
        let all: Vec<i32> = (1..=10).collect();
        assert_eq!(even_numbers(&all), vec![2, 4, 6, 8, 10]);
        assert!(even_numbers(&[1, 3, 5]).is_empty());
    }

    #[test]
    fn test_worked_section() {
        let section = WorkedExamples.build(&EmitContext::new("test")).unwrap();
        assert!(section.find_line("Sum: 433, Average: 86.60").is_some());
        assert!(section.find_line("a:1 g:2 i:1 m:2 n:1 o:1 p:1 r:2").is_some());
        assert!(section.find_line("Even numbers: [2, 4, 6, 8, 10]").is_some());
    }
}
