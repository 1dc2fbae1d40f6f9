//! Scripted model fakes shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use kritrim::generation::generator::Generator;
use kritrim::generation::retry::RetryPolicy;
use kritrim::generation::suggest::Suggester;
use kritrim::generation::{ImageModel, ModelReply, TextModel};
use kritrim::image::InlineImage;
use kritrim::{AppError, AppResult, Studio};

pub const PHOTO: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRg==";
pub const GENERATED: &str = "data:image/png;base64,R0VORVJBVEVE";

#[derive(Debug, Clone)]
pub enum Reply {
    Image,
    Text(&'static str),
    Fail(&'static str),
}

/// Answers with an image unless a rule whose needle appears in the prompt still
/// has scripted replies left.
#[derive(Default)]
pub struct FakeImageModel {
    rules: Mutex<Vec<(String, VecDeque<Reply>)>>,
    calls: Mutex<Vec<String>>,
    delay: Duration,
}

impl FakeImageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        FakeImageModel { delay, ..Self::default() }
    }

    pub fn on(self, needle: &str, replies: Vec<Reply>) -> Self {
        self.rules.lock().unwrap().push((needle.to_string(), replies.into()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageModel for FakeImageModel {
    async fn edit_image(&self, _source: &InlineImage, prompt: &str) -> AppResult<ModelReply> {
        self.calls.lock().unwrap().push(prompt.to_string());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let scripted = {
            let mut rules = self.rules.lock().unwrap();
            rules
                .iter_mut()
                .find(|(needle, replies)| prompt.contains(needle.as_str()) && !replies.is_empty())
                .and_then(|(_, replies)| replies.pop_front())
        };
        match scripted.unwrap_or(Reply::Image) {
            Reply::Image => Ok(ModelReply::Image(InlineImage::from_data_url(GENERATED)?)),
            Reply::Text(t) => Ok(ModelReply::Text(t.to_string())),
            Reply::Fail(msg) => Err(AppError::Gemini(msg.to_string())),
        }
    }
}

pub struct FakeTextModel {
    reply: Result<String, String>,
    calls: Mutex<Vec<String>>,
}

impl FakeTextModel {
    pub fn replying(text: &str) -> Self {
        FakeTextModel { reply: Ok(text.to_string()), calls: Mutex::new(Vec::new()) }
    }

    pub fn failing(message: &str) -> Self {
        FakeTextModel { reply: Err(message.to_string()), calls: Mutex::new(Vec::new()) }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextModel for FakeTextModel {
    async fn complete(&self, prompt: &str) -> AppResult<String> {
        self.calls.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(AppError::Gemini)
    }
}

pub fn studio(image: Arc<FakeImageModel>, text: Arc<FakeTextModel>) -> Studio {
    Studio::new(Generator::new(image, RetryPolicy::default()), Suggester::new(text), 2)
}
