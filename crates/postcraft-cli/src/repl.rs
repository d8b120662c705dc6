//! Read-prompt-print loops on top of [`ContentAgent`].
//!
//! Input and output are generic so the loops can be driven from tests.
use std::io::{self, BufRead, Write};

use postcraft::{
    agent::ContentAgent,
    generic::GenericMessage,
    provider::ChatCompletionProvider,
    types::{
        ContentStrategyPreferences, ContentStructure, OptimizationPreferences, PersonaPreferences,
        PostType, RequestDescriptor, TitleStrategy,
        reply::{ParseResponseTypeError, ReplyDescriptor, ResponseType},
        request::ParsePostTypeError,
    },
};

const QUIT_WORDS: [&str; 3] = ["quit", "exit", "q"];
const RULE: &str = "------------------------------";

pub struct Session<'a, B, R, W> {
    agent: &'a ContentAgent<B>,
    input: R,
    output: W,
}

impl<'a, B, R, W> Session<'a, B, R, W>
where
    B: ChatCompletionProvider,
    GenericMessage: Into<B::Message>,
    R: BufRead,
    W: Write,
{
    pub fn new(agent: &'a ContentAgent<B>, input: R, output: W) -> Self {
        Self {
            agent,
            input,
            output,
        }
    }

    /// Free-text loop until `quit`, `exit`, `q` or end of input.
    pub async fn run_chat(&mut self) -> io::Result<()> {
        writeln!(self.output, "Content agent ready!")?;
        writeln!(self.output, "Enter your content requests (type 'quit' to exit)")?;

        loop {
            let Some(line) = self.ask("\nYour prompt: ")? else {
                break;
            };
            if QUIT_WORDS.contains(&line.to_lowercase().as_str()) {
                break;
            }
            if line.is_empty() {
                continue;
            }

            writeln!(self.output, "\nGenerating content...")?;
            let result = self.agent.generate_content(&line).await;
            self.show("Generated Content", &result.to_string())?;
        }

        writeln!(self.output, "Goodbye!")
    }

    /// Numbered menu for Reddit posts and comment replies.
    pub async fn run_reddit(&mut self) -> io::Result<()> {
        writeln!(self.output, "Reddit content agent ready!")?;

        loop {
            writeln!(self.output, "\nReddit Post Generator")?;
            writeln!(self.output, "1. Quick post (basic parameters)")?;
            writeln!(self.output, "2. Advanced post (full optimization)")?;
            writeln!(self.output, "3. Comment reply")?;
            writeln!(self.output, "4. Exit")?;

            let Some(choice) = self.ask("\nChoose option (1-4): ")? else {
                break;
            };
            let outcome = match choice.as_str() {
                "1" => self.quick_post().await,
                "2" => self.advanced_post().await,
                "3" => self.comment_reply().await,
                "4" => break,
                _ => {
                    writeln!(self.output, "Please choose 1-4.")?;
                    continue;
                }
            };

            match outcome {
                Ok(true) => {}
                Ok(false) => break,
                Err(MenuError::Input(message)) => writeln!(self.output, "Error: {message}")?,
                Err(MenuError::Io(err)) => return Err(err),
            }
        }

        writeln!(self.output, "Goodbye!")
    }

    /// `Ok(false)` means input ended mid-form.
    async fn quick_post(&mut self) -> Result<bool, MenuError> {
        let Some(request) = self.ask_request(false)? else {
            return Ok(false);
        };

        writeln!(self.output, "\nGenerating Reddit content...")?;
        let result = self.agent.generate_reddit_content(&request).await;
        self.show("Generated Reddit Content", &result.to_string())?;
        Ok(true)
    }

    async fn advanced_post(&mut self) -> Result<bool, MenuError> {
        let Some(request) = self.ask_request(true)? else {
            return Ok(false);
        };

        writeln!(self.output, "\nGenerating optimized Reddit content...")?;
        let result = self.agent.generate_reddit_content(&request).await;
        self.show("Generated Optimized Reddit Content", &result.to_string())?;
        Ok(true)
    }

    async fn comment_reply(&mut self) -> Result<bool, MenuError> {
        let Some(post) = self.ask("Original post to comment on: ")? else {
            return Ok(false);
        };
        let Some(response_type) = self.ask("Response type (helpful/supportive/humorous/insightful): ")?
        else {
            return Ok(false);
        };
        let Some(max_words) = self.ask("Max words (default 15): ")? else {
            return Ok(false);
        };

        let response_type = match response_type.as_str() {
            "" => ResponseType::default(),
            other => other.parse::<ResponseType>()?,
        };
        let max_words = match max_words.as_str() {
            "" => ReplyDescriptor::DEFAULT_MAX_WORDS,
            other => other
                .parse()
                .map_err(|_| MenuError::Input(format!("`{other}` is not a word count")))?,
        };

        let reply = ReplyDescriptor::new(post)
            .with_response_type(response_type)
            .with_max_words(max_words);

        writeln!(self.output, "\nGenerating {response_type} comment...")?;
        let result = self.agent.generate_comment(&reply).await;
        self.show("Generated Comment", &result.to_string())?;
        if let Some(text) = result.text() {
            writeln!(self.output, "Word count: {}", text.split_whitespace().count())?;
        }
        Ok(true)
    }

    fn ask_request(&mut self, advanced: bool) -> Result<Option<RequestDescriptor>, MenuError> {
        let Some(topic) = self.ask("Topic: ")? else {
            return Ok(None);
        };
        let Some(venue) = self.ask("Subreddit (e.g., personalfinance): ")? else {
            return Ok(None);
        };
        let Some(post_type) = self.ask("Post type (first_post/comment/text_post/story/advice/question): ")?
        else {
            return Ok(None);
        };
        let post_type = match post_type.as_str() {
            "" => PostType::default(),
            other => other.parse::<PostType>()?,
        };

        let request = RequestDescriptor::new(topic, venue).with_post_type(post_type);
        if !advanced {
            return Ok(Some(request));
        }

        writeln!(self.output, "\nPersona Setup:")?;
        let Some(kind) = self.ask("Persona type (expert/everyman/helper/storyteller): ")? else {
            return Ok(None);
        };
        let Some(credentials) = self.ask("Credentials (optional): ")? else {
            return Ok(None);
        };
        let Some(tone) = self.ask("Tone (professional_but_relatable/casual/humorous): ")? else {
            return Ok(None);
        };
        let persona = PersonaPreferences {
            kind: non_empty(kind),
            credentials: non_empty(credentials),
            ..PersonaPreferences::new()
        }
        .with_tone_or_default(&tone);

        writeln!(self.output, "\nContent Strategy:")?;
        let Some(content_type) = self.ask("Content type (personal_story/advice/question/resource): ")?
        else {
            return Ok(None);
        };
        let Some(viral_hook) = self.ask("Viral hook (transformation/secret/mistake/victory): ")? else {
            return Ok(None);
        };
        let Some(emotional_trigger) = self.ask("Emotional trigger (inspiration/curiosity/empathy): ")?
        else {
            return Ok(None);
        };
        let Some(story_arc) = self.ask("Story arc (default struggle_to_success): ")? else {
            return Ok(None);
        };
        let strategy = ContentStrategyPreferences {
            content_type: non_empty(content_type),
            viral_hook: non_empty(viral_hook),
            emotional_trigger: non_empty(emotional_trigger),
            story_arc: non_empty(story_arc).or_else(|| Some("struggle_to_success".into())),
            value_type: None,
        };

        writeln!(self.output, "\nOptimization:")?;
        let Some(include_tl_dr) = self.ask_yes_no("Include TL;DR? (y/n): ")? else {
            return Ok(None);
        };
        let Some(use_bullet_points) = self.ask_yes_no("Use bullet points? (y/n): ")? else {
            return Ok(None);
        };
        let Some(include_credibility) = self.ask_yes_no("Include credibility in title? (y/n): ")?
        else {
            return Ok(None);
        };
        let optimization = OptimizationPreferences::new()
            .with_title_strategy(TitleStrategy {
                hook_type: Some("specific_number".into()),
                include_credibility,
            })
            .with_content_structure(ContentStructure {
                include_tl_dr,
                use_bullet_points,
            });

        Ok(Some(
            request
                .with_persona(persona)
                .with_content_strategy(strategy)
                .with_optimization(optimization),
        ))
    }

    /// Print `label`, read one trimmed line. `None` at end of input.
    fn ask(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn ask_yes_no(&mut self, label: &str) -> io::Result<Option<bool>> {
        Ok(self
            .ask(label)?
            .map(|answer| answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")))
    }

    fn show(&mut self, title: &str, body: &str) -> io::Result<()> {
        writeln!(self.output, "\n{title}:")?;
        writeln!(self.output, "{RULE}")?;
        writeln!(self.output, "{body}")?;
        writeln!(self.output, "{RULE}")
    }
}

enum MenuError {
    /// Bad user input; reported, then the menu is shown again.
    Input(String),
    Io(io::Error),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Io(err)
    }
}

impl From<ParsePostTypeError> for MenuError {
    fn from(err: ParsePostTypeError) -> Self {
        MenuError::Input(err.to_string())
    }
}

impl From<ParseResponseTypeError> for MenuError {
    fn from(err: ParseResponseTypeError) -> Self {
        MenuError::Input(err.to_string())
    }
}

fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
