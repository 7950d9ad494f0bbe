//! News posts. Content is stored as markdown and rendered on the way out.

use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Event, Options, Parser};

use crate::model::news::{CreateNewsDto, NewsDto, UpdateNewsDto};

#[derive(Debug, Clone, PartialEq)]
pub struct News {
    pub id: i32,
    pub author_id: Option<i32>,
    pub author_name: Option<String>,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl News {
    pub fn from_entity(entity: entity::news::Model, author_name: Option<String>) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            author_name,
            title: entity.title,
            content: entity.content,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> NewsDto {
        NewsDto {
            html: render_markdown(&self.content),
            id: self.id,
            author_id: self.author_id,
            author_name: self.author_name,
            title: self.title,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNewsParam {
    pub author_id: i32,
    pub title: String,
    pub content: String,
}

impl CreateNewsParam {
    pub fn from_dto(author_id: i32, dto: CreateNewsDto) -> Self {
        Self {
            author_id,
            title: dto.title.trim().to_string(),
            content: dto.content,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateNewsParam {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl UpdateNewsParam {
    pub fn from_dto(dto: UpdateNewsDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            content: dto.content,
        }
    }
}

/// Renders markdown to HTML. Raw HTML in the source is escaped, not passed through.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
