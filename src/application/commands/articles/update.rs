// src/application/commands/articles/update.rs
use super::{ArticleCommandService, service::parse_status};
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::category::CategoryId,
};

/// Partial update; `None` leaves a field as it is. `category_id: Some(None)`
/// detaches the category.
#[derive(Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
    pub urlname: Option<String>,
    pub status: Option<String>,
    pub category_id: Option<Option<i64>>,
}

impl ArticleCommandService {
    pub async fn update_article(&self, command: UpdateArticleCommand) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(command.id).await?;

        let UpdateArticleCommand {
            id: _,
            title,
            body,
            urlname,
            status,
            category_id,
        } = command;

        if let Some(title) = title {
            article.set_title(title);
        }
        if let Some(body) = body {
            article.set_body(body);
        }
        if let Some(urlname) = urlname {
            article.set_urlname(urlname);
        }
        if let Some(status) = status.as_deref() {
            article.set_status(parse_status(status)?);
        }
        if let Some(category_id) = category_id {
            let category = category_id.map(CategoryId::new).transpose()?;
            article.set_category(category);
        }

        self.save(&mut article).await?;
        self.presenter.present(&article).await
    }
}
