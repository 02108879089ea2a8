use crate::domain::content::{BlogFields, LinkFields, MetaDataFields, PromotionFields};
use crate::domain::types::slugify;
use crate::forms::{EntityForm, FormError, blank_to_none, clean_rich_text, split_list};

impl EntityForm for BlogFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.title = self.title.trim().to_string();
        self.slug = if self.slug.trim().is_empty() {
            slugify(&self.title)
        } else {
            slugify(&self.slug)
        };
        self.author = self.author.trim().to_string();
        self.summary = self.summary.trim().to_string();
        self.content = clean_rich_text(&self.content);
        blank_to_none(&mut self.thumbnail);
        self.tags = split_list(&self.tags);
        Ok(())
    }
}

impl EntityForm for PromotionFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.title = self.title.trim().to_string();
        self.code = self.code.trim().to_uppercase();
        self.description = self.description.trim().to_string();
        Ok(())
    }
}

impl EntityForm for LinkFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.label = self.label.trim().to_string();
        self.url = self.url.trim().to_string();
        Ok(())
    }
}

impl EntityForm for MetaDataFields {
    fn normalize(&mut self) -> Result<(), FormError> {
        self.page_path = self.page_path.trim().to_string();
        self.title = self.title.trim().to_string();
        self.description = self.description.trim().to_string();
        self.keywords = split_list(&self.keywords);
        Ok(())
    }
}
