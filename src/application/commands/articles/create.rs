// src/application/commands/articles/create.rs
use super::{ArticleCommandService, service::parse_status};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{article::Article, category::CategoryId, user::UserId},
};

pub struct CreateArticleCommand {
    pub owner_id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub urlname: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder(owner_id: i64) -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder {
            owner_id,
            ..Default::default()
        }
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    owner_id: i64,
    title: Option<String>,
    body: Option<String>,
    urlname: Option<String>,
    status: Option<String>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn urlname(mut self, urlname: impl Into<String>) -> Self {
        self.urlname = Some(urlname.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn category_id(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            owner_id: self.owner_id,
            title: self.title,
            body: self.body,
            urlname: self.urlname,
            status: self.status,
            category_id: self.category_id,
        }
    }
}

impl ArticleCommandService {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let mut article = Article::new(Some(UserId::new(command.owner_id)?));

        if let Some(title) = command.title {
            article.set_title(title);
        }
        if let Some(body) = command.body {
            article.set_body(body);
        }
        if let Some(urlname) = command.urlname {
            article.set_urlname(urlname);
        }
        if let Some(status) = command.status.as_deref() {
            article.set_status(parse_status(status)?);
        }
        if let Some(category_id) = command.category_id {
            article.set_category(Some(CategoryId::new(category_id)?));
        }

        self.save(&mut article).await?;
        self.presenter.present(&article).await
    }
}
