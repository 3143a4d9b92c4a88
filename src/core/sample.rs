/// Bundled demonstration text
///
/// A few paragraphs that exercise every built-in vocabulary. Used by the
/// `--sample` flag and by tests.

pub const SAMPLE_TEXT: &str = r#"The quick brown fox jumps over the lazy dog. This is a sample text that contains various pronouns such as I, you, he, she, it, we, they, and others. I am writing this text to demonstrate how the text analyzer works. You can use this tool to analyze any text you want. He went to the store yesterday. She likes to read books. It is raining outside. We are going to the movies tonight. They have a new car.

This text also contains various prepositions like in, on, at, by, with, from, to, for, of, about, and others. The cat is on the table. The book is in the drawer. I'll meet you at the cafe. He drove by the park. She went with her friends. The letter is from my aunt. I'm going to the store. This gift is for you. The color of the sky is blue. He told me about his trip.

Articles are also present in this text, including indefinite articles like a and an. A dog barked loudly. An apple fell from the tree. A cat chased a mouse. An elephant is a large animal. A university student studied for an exam. An honest person tells the truth.

Let's add more text to reach a significant word count. The sun rises in the east and sets in the west. Birds fly in the sky. Fish swim in the ocean. Mountains are tall and majestic. Rivers flow to the sea. Trees provide shade and oxygen. Flowers bloom in spring. The seasons change throughout the year. People live in houses and apartments. Cars drive on roads. Planes fly in the air. Boats sail on water.

I hope this sample text helps you understand how the analyzer works. You can replace it with your own text for analysis. It should contain various types of words, including pronouns, prepositions, articles, and other parts of speech. The analyzer will count these elements and display the results for you."#;
