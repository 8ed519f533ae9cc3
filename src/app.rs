//! Main application UI and quiz session state.
//! Handles the word list editor, the card screens, and the results screen.

use eframe::egui;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;
use tracing::{error, info};
use vocab_quiz::models::{Deck, Stats, draw_session_words};
use vocab_quiz::wordlist::{WordList, export_json_to_path, parse_words, read_word_file};
use vocab_quiz::{QuizConfig, QuizError};

/// Word list shown in the editor when nothing was loaded at startup
pub const SAMPLE_WORDS: &str = "\
hello,greeting,cześć
thank you,,dziękuję
please,polite request,proszę
dog,an animal,pies
cat,,kot
water,\"drink, liquid\",woda";

const CORRECT_FILL: egui::Color32 = egui::Color32::from_rgb(46, 125, 50);
const SELECTED_FILL: egui::Color32 = egui::Color32::from_rgb(183, 28, 28);

/// Application screen states
#[derive(Clone, Copy, Debug, PartialEq)]
enum Screen {
    Input,
    Question,
    Answered {
        selected: usize,
        correct: usize,
    },
    Results,
}

/// How an option button is highlighted once the card is answered
#[derive(Clone, Copy, Debug, PartialEq)]
enum OptionMark {
    Correct,
    Selected,
    Plain,
}

impl OptionMark {
    fn fill(self) -> Option<egui::Color32> {
        match self {
            Self::Correct => Some(CORRECT_FILL),
            Self::Selected => Some(SELECTED_FILL),
            Self::Plain => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Message {
    Info(String),
    Error(String),
}

/// User actions collected while rendering and applied afterwards
#[derive(Clone, Copy, Debug)]
enum Action {
    OpenFile,
    ExportJson,
    Start,
    Choose(usize),
    Next,
    EditWords,
}

/// Main application state. Each app owns its own deck, there is no shared session.
pub struct QuizApp {
    config: QuizConfig,
    input: String,
    list_name: String,
    deck: Option<Deck>,
    screen: Screen,
    message: Option<Message>,
    rng: StdRng,
}

impl eframe::App for QuizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            let screen = self.screen;
            match screen {
                Screen::Input => self.render_input(ui, &mut action),
                Screen::Question => self.render_card(ui, None, &mut action),
                Screen::Answered { selected, correct } => {
                    self.render_card(ui, Some((selected, correct)), &mut action)
                }
                Screen::Results => self.render_results(ui, &mut action),
            }
        });

        if let Some(action) = action {
            self.apply(action);
        }
    }
}

impl QuizApp {
    pub fn new(config: QuizConfig, input: String, list_name: String) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            config,
            input,
            list_name,
            deck: None,
            screen: Screen::Input,
            message: None,
            rng,
        }
    }

    /// Renders the word list editor
    fn render_input(&mut self, ui: &mut egui::Ui, action: &mut Option<Action>) {
        ui.heading("Vocabulary Quiz");
        ui.label("One word per line: word,description,translation");
        ui.label(format!(
            "Up to {} random words are drawn for each session.",
            self.config.deck_limit
        ));
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Open File").clicked() {
                *action = Some(Action::OpenFile);
            }
            if ui.button("Export JSON").clicked() {
                *action = Some(Action::ExportJson);
            }
        });

        egui::ScrollArea::vertical()
            .id_source("word_list")
            .max_height(ui.available_height() - 80.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::multiline(&mut self.input)
                        .desired_rows(16)
                        .desired_width(f32::INFINITY),
                );
            });

        ui.separator();
        self.render_message(ui);

        if ui.button("Start").clicked() {
            *action = Some(Action::Start);
        }
    }

    /// Renders the current card. `answer` holds the selected and correct option once answered.
    fn render_card(
        &self,
        ui: &mut egui::Ui,
        answer: Option<(usize, usize)>,
        action: &mut Option<Action>,
    ) {
        let Some(deck) = &self.deck else {
            return;
        };
        let Some(card) = deck.current_card() else {
            return;
        };
        let lowercase = self.config.lowercase;

        ui.label(card_progress(deck.position(), deck.size(), deck.remaining()));
        ui.add_space(20.0);

        ui.group(|ui| {
            ui.set_min_height(120.0);
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(display_text(card.word(), lowercase));
                ui.add_space(10.0);
                if answer.is_some() && !card.description().is_empty() {
                    ui.label(display_text(card.description(), lowercase));
                }
            });
        });

        ui.add_space(20.0);

        for (i, option) in card.options().iter().enumerate() {
            let button = egui::Button::new(display_text(option, lowercase))
                .min_size(egui::vec2(ui.available_width(), 36.0));

            match answer {
                None => {
                    if ui.add(button).clicked() {
                        *action = Some(Action::Choose(i));
                    }
                }
                Some((selected, correct)) => {
                    let button = match option_mark(i, selected, correct).fill() {
                        Some(fill) => button.fill(fill),
                        None => button,
                    };
                    ui.add_enabled(false, button);
                }
            }
            ui.add_space(4.0);
        }

        ui.add_space(20.0);
        self.render_message(ui);

        if answer.is_some() && ui.button("Next").clicked() {
            *action = Some(Action::Next);
        }
    }

    /// Renders the final score with a restart control
    fn render_results(&self, ui: &mut egui::Ui, action: &mut Option<Action>) {
        let Some(deck) = &self.deck else {
            return;
        };
        let stats = deck.get_stats();

        ui.heading("Results");
        ui.add_space(10.0);
        for line in result_lines(&stats) {
            ui.label(line);
        }
        ui.add_space(20.0);

        ui.horizontal(|ui| {
            if ui.button("Start").clicked() {
                *action = Some(Action::Start);
            }
            if ui.button("Edit Words").clicked() {
                *action = Some(Action::EditWords);
            }
        });
    }

    fn render_message(&self, ui: &mut egui::Ui) {
        match &self.message {
            Some(Message::Info(text)) => {
                ui.label(text);
            }
            Some(Message::Error(text)) => {
                ui.colored_label(egui::Color32::RED, text);
            }
            None => {}
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::OpenFile => self.handle_open(),
            Action::ExportJson => self.handle_export(),
            Action::Start => self.start_session(),
            Action::Choose(n) => self.choose(n),
            Action::Next => self.advance(),
            Action::EditWords => {
                self.deck = None;
                self.message = None;
                self.screen = Screen::Input;
            }
        }
    }

    /// Parses the editor content and starts a fresh deck, replacing any previous one
    fn start_session(&mut self) {
        match self.build_deck() {
            Ok(deck) => {
                self.deck = Some(deck);
                self.message = None;
                self.advance();
            }
            Err(e) => {
                error!("can't start session: {e}");
                self.deck = None;
                self.message = Some(Message::Error(e.to_string()));
                self.screen = Screen::Input;
            }
        }
    }

    fn build_deck(&mut self) -> Result<Deck, QuizError> {
        let words = parse_words(&self.input)?;
        let words = draw_session_words(words, self.config.deck_limit, &mut self.rng);
        Deck::with_rng(words, StdRng::from_rng(&mut self.rng))
    }

    /// Moves to the next card, or to the results once the deck is exhausted
    fn advance(&mut self) {
        let Some(deck) = &mut self.deck else {
            return;
        };
        self.message = None;
        self.screen = match deck.get_next() {
            Some(_) => Screen::Question,
            None => Screen::Results,
        };
    }

    fn choose(&mut self, selected: usize) {
        let Some(deck) = &mut self.deck else {
            return;
        };
        let Some(correct) = deck.current_card().map(|card| card.get_correct()) else {
            return;
        };

        match deck.validate_option(selected) {
            Ok(_) => self.screen = Screen::Answered { selected, correct },
            Err(e) => {
                error!("can't validate option {selected}: {e}");
                self.message = Some(Message::Error(e.to_string()));
            }
        }
    }

    /// Handles word list loading through a file dialog
    fn handle_open(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Word lists", &["txt", "csv", "json"])
            .pick_file()
        else {
            return;
        };

        match read_word_file(&path) {
            Ok(text) => {
                self.input = text;
                self.list_name = list_name_from_path(&path);
                self.message = Some(Message::Info(format!(
                    "Loaded '{}'",
                    path.display()
                )));
            }
            Err(e) => {
                error!(path = %path.display(), "can't open word list: {e}");
                self.message = Some(Message::Error(format!("Open failed: {e}")));
            }
        }
    }

    /// Handles word list export to a JSON file
    fn handle_export(&mut self) {
        let words = match parse_words(&self.input) {
            Ok(words) => words,
            Err(e) => {
                self.message = Some(Message::Error(format!("Export failed: {e}")));
                return;
            }
        };

        let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.json", self.list_name))
            .add_filter("JSON files", &["json"])
            .save_file()
        else {
            return;
        };

        let list = WordList {
            name: self.list_name.clone(),
            words,
        };
        self.message = Some(match export_json_to_path(&list, &path) {
            Ok(()) => {
                info!(path = %path.display(), "export finished");
                Message::Info(format!(
                    "Exported {} words to '{}'",
                    list.words.len(),
                    path.display()
                ))
            }
            Err(e) => Message::Error(format!("Export failed: {e}")),
        });
    }
}

/// Highlight for option `row`: the correct option wins over the selected one
fn option_mark(row: usize, selected: usize, correct: usize) -> OptionMark {
    if row == correct {
        OptionMark::Correct
    } else if row == selected {
        OptionMark::Selected
    } else {
        OptionMark::Plain
    }
}

fn card_progress(position: usize, size: usize, remaining: usize) -> String {
    format!("Card {position} / {size} ({remaining} left)")
}

fn display_text(text: &str, lowercase: bool) -> String {
    if lowercase {
        text.to_lowercase()
    } else {
        text.to_string()
    }
}

/// Score lines with percentages of the deck size
fn result_lines(stats: &Stats) -> [String; 2] {
    [
        format!("correct: {} ({:.2}%)", stats.correct, stats.correct_percent()),
        format!(
            "incorrect: {} ({:.2}%)",
            stats.incorrect,
            stats.incorrect_percent()
        ),
    ]
}

/// Word list name used for exports, taken from the file stem
pub fn list_name_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Word List".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_quiz::models::OPTION_COUNT;

    fn seeded_app(input: &str) -> QuizApp {
        let config = QuizConfig {
            seed: Some(17),
            ..QuizConfig::default()
        };
        QuizApp::new(config, input.to_string(), "Test".to_string())
    }

    fn current_correct(app: &QuizApp) -> usize {
        app.deck
            .as_ref()
            .and_then(|deck| deck.current_card())
            .map(|card| card.get_correct())
            .unwrap()
    }

    #[test]
    fn test_start_shows_first_card() {
        let mut app = seeded_app(SAMPLE_WORDS);

        app.apply(Action::Start);

        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.deck.as_ref().unwrap().size(), 6);
        assert_eq!(app.deck.as_ref().unwrap().position(), 1);
    }

    #[test]
    fn test_full_session_reaches_results() {
        let mut app = seeded_app("bla,desc,trans\nfoo,,bar\nx,y,z\nq,w,e");
        app.apply(Action::Start);

        let mut answered = 0;
        while app.screen == Screen::Question {
            let correct = current_correct(&app);
            app.apply(Action::Choose(correct));
            assert_eq!(
                app.screen,
                Screen::Answered {
                    selected: correct,
                    correct
                }
            );
            answered += 1;
            app.apply(Action::Next);
        }

        assert_eq!(answered, 4);
        assert_eq!(app.screen, Screen::Results);
        let stats = app.deck.as_ref().unwrap().get_stats();
        assert_eq!(
            result_lines(&stats),
            [
                "correct: 4 (100.00%)".to_string(),
                "incorrect: 0 (0.00%)".to_string()
            ]
        );
    }

    #[test]
    fn test_wrong_choice_marks_both_options() {
        let mut app = seeded_app(SAMPLE_WORDS);
        app.apply(Action::Start);

        let correct = current_correct(&app);
        let wrong = (correct + 1) % OPTION_COUNT;
        app.apply(Action::Choose(wrong));

        assert_eq!(
            app.screen,
            Screen::Answered {
                selected: wrong,
                correct
            }
        );
        assert_eq!(app.deck.as_ref().unwrap().get_stats().correct, 0);
    }

    #[test]
    fn test_second_choice_does_not_change_score() {
        let mut app = seeded_app(SAMPLE_WORDS);
        app.apply(Action::Start);

        let correct = current_correct(&app);
        app.apply(Action::Choose(correct));
        app.apply(Action::Choose(correct));

        assert_eq!(app.deck.as_ref().unwrap().get_stats().correct, 1);
        assert!(matches!(app.message, Some(Message::Error(_))));
    }

    #[test]
    fn test_malformed_input_stays_on_editor() {
        let mut app = seeded_app("a,b,c\nbroken line\nd,e,f\ng,h,i");

        app.apply(Action::Start);

        assert_eq!(app.screen, Screen::Input);
        assert!(app.deck.is_none());
        assert_eq!(
            app.message,
            Some(Message::Error(
                "can't parse line 2: broken line (too few fields)".to_string()
            ))
        );
    }

    #[test]
    fn test_too_few_words_stays_on_editor() {
        let mut app = seeded_app("a,,b\nc,,d\ne,,f");

        app.apply(Action::Start);

        assert_eq!(app.screen, Screen::Input);
        assert!(matches!(app.message, Some(Message::Error(_))));
    }

    #[test]
    fn test_restart_builds_fresh_deck() {
        let mut app = seeded_app(SAMPLE_WORDS);
        app.apply(Action::Start);
        while app.screen != Screen::Results {
            match app.screen {
                Screen::Question => app.apply(Action::Choose(0)),
                _ => app.apply(Action::Next),
            }
        }

        app.apply(Action::Start);

        assert_eq!(app.screen, Screen::Question);
        assert_eq!(app.deck.as_ref().unwrap().get_stats().correct, 0);
        assert_eq!(app.deck.as_ref().unwrap().position(), 1);
    }

    #[test]
    fn test_deck_limit_truncates_session() {
        let config = QuizConfig {
            deck_limit: 4,
            seed: Some(3),
            ..QuizConfig::default()
        };
        let mut app = QuizApp::new(config, SAMPLE_WORDS.to_string(), "Test".to_string());

        app.apply(Action::Start);

        assert_eq!(app.deck.as_ref().unwrap().size(), 4);
    }

    #[test]
    fn test_edit_words_drops_session() {
        let mut app = seeded_app(SAMPLE_WORDS);
        app.apply(Action::Start);

        app.apply(Action::EditWords);

        assert_eq!(app.screen, Screen::Input);
        assert!(app.deck.is_none());
    }

    #[test]
    fn test_option_mark_prefers_correct() {
        assert_eq!(option_mark(2, 2, 2), OptionMark::Correct);
        assert_eq!(option_mark(1, 1, 3), OptionMark::Selected);
        assert_eq!(option_mark(3, 1, 3), OptionMark::Correct);
        assert_eq!(option_mark(0, 1, 3), OptionMark::Plain);
    }

    #[test]
    fn test_card_progress_uses_remaining_count() {
        let mut app = seeded_app(SAMPLE_WORDS);
        app.apply(Action::Start);
        let deck = app.deck.as_ref().unwrap();

        assert_eq!(
            card_progress(deck.position(), deck.size(), deck.remaining()),
            "Card 1 / 6 (5 left)"
        );
    }

    #[test]
    fn test_display_text() {
        assert_eq!(display_text("Cześć", true), "cześć");
        assert_eq!(display_text("Cześć", false), "Cześć");
    }

    #[test]
    fn test_result_lines_two_decimals() {
        let lines = result_lines(&Stats::new(2, 3));

        assert_eq!(lines[0], "correct: 2 (66.67%)");
        assert_eq!(lines[1], "incorrect: 1 (33.33%)");
    }

    #[test]
    fn test_list_name_from_path() {
        assert_eq!(list_name_from_path(Path::new("/tmp/animals.json")), "animals");
        assert_eq!(list_name_from_path(Path::new("/")), "Word List");
    }
}
