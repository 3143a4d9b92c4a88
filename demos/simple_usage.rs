/// Simple example demonstrating how to use the Text Analyzer library

use anyhow::Result;
use text_analyzer::{analyze_text, count_vocabulary, Vocabulary};

fn main() -> Result<()> {
    let text = "She put the book on a shelf above an old desk. It was hers.";

    println!("Analyzing: {}", text);

    let analysis = analyze_text(text)?;

    println!("\nWords: {}, letters: {}", analysis.basic.words, analysis.basic.letters);

    // Only show words that occurred
    for vocabulary in &analysis.vocabularies {
        println!("\n{} ({} found):", vocabulary.title, vocabulary.counts.total());
        for entry in vocabulary.counts.non_zero_sorted() {
            println!("  - {}: {}", entry.word, entry.count);
        }
    }

    // Any word list can be counted on its own
    let furniture = Vocabulary::new("furniture", "Furniture", &["shelf", "desk", "chair"])?;
    let table = count_vocabulary(text, &furniture);
    println!("\nFurniture mentioned: {}", table.total());

    Ok(())
}
