use validator::Validate;

use crate::{
    entities::contact::{ContactForm, ContactListResponse, ContactResponse},
    errors::AppError,
    repositories::contact::ContactRepository,
};

pub struct ContactHandler<R>
where
    R: ContactRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles a public contact form submission.
    pub async fn create_contact_message(
        &self,
        request: ContactForm,
    ) -> Result<ContactResponse, AppError> {
        request.validate()?;

        let new_msg = request.prepare_for_insert();
        let id = self.contact_repo.create_contact_message(&new_msg).await?;

        Ok(ContactResponse {
            message: "Your message has been received.".to_string(),
            id,
        })
    }

    /// Lists all contact messages, newest first, for the admin panel.
    pub async fn list_contact_messages(&self) -> Result<ContactListResponse, AppError> {
        let messages = self.contact_repo.list_contact_messages().await?;
        let total = self.contact_repo.count_contact_messages().await?;

        Ok(ContactListResponse { messages, total })
    }
}
