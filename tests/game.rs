//! End-to-end game behavior through the public API

use rand::SeedableRng;
use rand::rngs::StdRng;
use word_scramble::core::{derivable_words, max_score};
use word_scramble::dictionary::{Dictionary, WordListDictionary};
use word_scramble::game::{GameState, Rejection, RootWordPool, WordGame};
use word_scramble::wordlists::{DICTIONARY, WordSource};

fn listen_game() -> WordGame<WordListDictionary> {
    WordGame::with_root_word(
        RootWordPool::embedded(),
        WordListDictionary::embedded(),
        "listen",
    )
}

#[test]
fn multiset_subset_law() {
    let mut game = listen_game();
    assert!(game.submit("silt").is_ok());

    // "sits" is a real word but needs a second 's'
    let dictionary = WordListDictionary::from_words(["sits", "its"]);
    let mut state = GameState::new("listen");
    assert_eq!(
        state.submit("sits", &dictionary),
        Err(Rejection::NotComposable {
            root: "listen".to_string()
        })
    );
    assert!(state.submit("its", &dictionary).is_ok());
}

#[test]
fn repeated_rejection_is_stable_and_side_effect_free() {
    let mut game = listen_game();
    game.submit("lens").unwrap();
    let before = game.state().clone();

    for candidate in ["zest", "zest", "qwerty", "qwerty", "listen", "listen"] {
        let first = game.submit(candidate);
        let second = game.submit(candidate);
        assert!(first.is_err());
        assert_eq!(first, second);
        assert_eq!(game.state(), &before);
    }
}

#[test]
fn accepted_word_cannot_be_resubmitted_in_any_form() {
    let dictionary = WordListDictionary::from_words(["cat", "act"]);
    let mut state = GameState::new("cats");
    state.submit("cat", &dictionary).unwrap();

    for variant in ["cat", "CAT", " Cat ", "cat\n"] {
        assert_eq!(state.submit(variant, &dictionary), Err(Rejection::AlreadyUsed));
    }
}

#[test]
fn score_law_and_reset_on_new_word() {
    let mut game = listen_game();
    let words = ["tinsel", "silt", "lens", "it"];
    for word in words {
        game.submit(word).unwrap();
    }
    assert_eq!(game.score(), words.iter().map(|w| w.len()).sum::<usize>());

    game.new_word();
    assert_eq!(game.score(), 0);
    assert!(game.pool().contains(game.root_word()));
}

#[test]
fn root_identity_always_rejected() {
    for root in RootWordPool::embedded().words() {
        let mut state = GameState::new(root);
        let dictionary = WordListDictionary::embedded();
        assert!(dictionary.is_valid_english_word(root));
        assert_eq!(state.submit(root, &dictionary), Err(Rejection::IdenticalToRoot));
        assert_eq!(
            state.submit(&root.to_uppercase(), &dictionary),
            Err(Rejection::IdenticalToRoot)
        );
    }
}

#[test]
fn clear_accepted_isolated_from_root_and_score() {
    let mut game = listen_game();
    game.submit("silent").unwrap(); // an anagram of the root is a different word
    game.submit("tinsel").unwrap();

    let root = game.root_word().to_string();
    let score = game.score();
    game.clear_accepted();

    assert!(game.accepted_words().is_empty());
    assert_eq!(game.root_word(), root);
    assert_eq!(game.score(), score);
}

#[test]
fn seeded_picks_stay_in_pool() {
    let pool = RootWordPool::embedded();
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..50 {
        assert!(pool.contains(&pool.pick(&mut rng)));
    }
}

#[test]
fn every_derivable_word_is_accepted_once() {
    let dictionary = WordListDictionary::embedded();
    let mut state = GameState::new("painters");

    let derivable = derivable_words("painters", DICTIONARY);
    for word in &derivable {
        assert!(state.submit(word, &dictionary).is_ok(), "{word} rejected");
    }

    assert_eq!(state.score(), max_score("painters", DICTIONARY));
    assert_eq!(state.accepted_words().len(), derivable.len());
}

#[test]
fn missing_word_list_is_a_load_error() {
    let source = WordSource::from_name("/nonexistent/word_scramble/start.txt");
    let err = source.load_root_word_pool().unwrap_err();
    assert!(err.to_string().contains("could not load word list"));
}
