//! Zero-shot prompts: the task alone, no worked examples.

use super::Example;

pub const EXAMPLES: &[Example] = &[
    Example::new(
        "Text Classification",
        r#"Classify the following text as either "positive", "negative", or "neutral":
Text: "I absolutely love this new restaurant! The food was amazing and the service was excellent."
Classification:"#,
    ),
    Example::new(
        "Question Answering",
        r#"Answer the following question based on general knowledge:
Question: What is the capital of Japan and what is it famous for?
Answer:"#,
    ),
    Example::new(
        "Language Translation",
        r#"Translate the following English text to French:
English: "Hello, how are you today? I hope you're having a wonderful day!"
French:"#,
    ),
    Example::new(
        "Code Generation",
        r#"Write a Python function that calculates the factorial of a number:
Function name: calculate_factorial
Input: integer n
Output: factorial of n
Include error handling for negative numbers.
Code:"#,
    ),
];
