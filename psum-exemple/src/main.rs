use psum_core::dictionary::{BundledDictionaries, DictionaryStore, Language, WordListResolver};
use psum_core::generator::{GenerationRequest, Range, generate_lorem};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load all bundled dictionaries from the "data" directory (<lang>/<id>.json files)
    let bundled = BundledDictionaries::load("./data")?;

    // User dictionaries are kept in memory for this example
    let mut store = DictionaryStore::in_memory(bundled);

    // List what is available in French
    for summary in store.list(Language::Fr)? {
        println!("{} ({}): {} words", summary.label, summary.id, summary.count);
    }

    // Create a custom dictionary, one word per line; the name is kept as its label
    let created = store.create_dictionary(
        Language::Fr,
        "Fromages",
        Some("Fromages français"),
        "comté\nbrie\nroquefort\nreblochon",
    )?;
    println!("Created {} ({})", created.label, created.id);

    // Resolve a selection into a single word list (bundled + custom, deduplicated)
    let selection = vec!["latin".to_owned(), "fromages".to_owned()];
    let words = store.resolve(Language::Fr, &selection)?;

    // Three paragraphs of 2 to 4 sentences, 4 to 10 words each
    let request = GenerationRequest::paragraphs(3, Range::new(2, 4)?, Range::new(4, 10)?);
    for (i, paragraph) in generate_lorem(&words, &request)?.iter().enumerate() {
        println!("Paragraph {}: {}", i + 1, paragraph);
    }

    // Single sentence mode ignores the paragraph settings
    let request = GenerationRequest::single_sentence(Range::new(6, 6)?);
    println!("Sentence: {}", generate_lorem(&words, &request)?[0]);

    // Invalid ranges are rejected before generating anything
    match Range::new(8, 3) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Selecting nothing and selecting empty dictionaries are different errors
    match store.resolve(Language::Fr, &[]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }
    match store.resolve(Language::Fr, &["unknown".to_owned()]) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Export the user configuration (custom dictionaries and added words)
    println!("{}", store.export_config(Language::Fr)?.to_json_pretty()?);

    Ok(())
}
