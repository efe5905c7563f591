use rand::thread_rng;

use vocab_trainer::vocab::{self, VocabWord};
use vocab_trainer::wordsearch::{WordSearch, WordSearchConfig};

fn main() {
    env_logger::init();

    let words = [
        VocabWord::new("нон", "bread"),
        VocabWord::new("гул", "flower"),
        VocabWord::new("хона", "house"),
        VocabWord::new("мактаб", "school"),
        VocabWord::new("дарахт", "tree"),
        VocabWord::new("осмон", "sky"),
        VocabWord::new("китоб", "book"),
        VocabWord::new("борон", "rain"),
        VocabWord::new("офтоб", "sun"),
    ];

    let mut rng = thread_rng();
    let candidates = vocab::words_for_word_search(&words, &mut rng);
    let search = WordSearch::generate_with_rng(&candidates, &WordSearchConfig::default(), &mut rng);

    println!("{}", search);
    println!(
        "{} of {} words placed",
        search.placed_words().len(),
        candidates.len()
    );
}
