use log::{info, warn};
use crate::backoffice::controller::error::ScreenError;
use crate::backoffice::model::ingredient::{Ingredient, IngredientEdit, IngredientUpdate};
use crate::backoffice::model::notice::{NoticeKind, Notices};
use crate::backoffice::normalize::collection::{normalize_all, normalize_one};
use crate::backoffice::normalize::{INGREDIENT, INGREDIENTS};
use crate::backoffice::transport::client::ApiClient;

const UPDATE_ENDPOINT: &str = "/updateingredient";

/// Ingredient inventory: list, detail and edit.
pub(crate) struct IngredientsScreen {
    pub ingredients: Vec<Ingredient>,
    pub notices: Notices,
}

impl IngredientsScreen {
    pub async fn load(api: &ApiClient) -> Result<Self, ScreenError> {
        let mut screen = Self {
            ingredients: vec![],
            notices: Notices::default(),
        };
        screen.refresh(api).await?;
        Ok(screen)
    }

    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ScreenError> {
        let payload = api.get(INGREDIENTS.endpoint, &[]).await?.into_value();
        self.ingredients = normalize_all(Some(&payload), INGREDIENTS.tuple_keys);
        info!("loaded {} ingredients", self.ingredients.len());
        Ok(())
    }

    /// Full record for one ingredient. When the detail payload holds nothing usable the
    /// list row is used instead.
    pub async fn detail(&self, api: &ApiClient, id: i64) -> Result<Ingredient, ScreenError> {
        let endpoint = format!("{}/{}", INGREDIENT.endpoint, id);
        let payload = api.get(&endpoint, &[]).await?.into_value();
        let row = self.ingredients.iter().find(|i| i.ingredientid == id);
        match normalize_one::<Ingredient>(Some(&payload), INGREDIENT.tuple_keys) {
            Some(detail) => Ok(detail),
            None => {
                warn!("ingredient {} detail payload unusable, falling back to list row", id);
                row.cloned().ok_or(ScreenError::UnknownItem(id))
            }
        }
    }

    /// Apply `edit` on top of the current record, send it and reload the list.
    pub async fn update(&mut self, api: &ApiClient, id: i64, edit: IngredientEdit) -> Result<Ingredient, ScreenError> {
        let ingredient = edit.apply(self.detail(api, id).await?);
        if ingredient.description.trim().is_empty() {
            return Err(ScreenError::Blank("description"));
        }
        if ingredient.packtype.trim().is_empty() {
            return Err(ScreenError::Blank("pack type"));
        }

        api.post(UPDATE_ENDPOINT, &IngredientUpdate::from(&ingredient)).await?;
        self.notices.push(NoticeKind::Success, "Ingredient updated successfully!");
        self.refresh(api).await?;
        Ok(ingredient)
    }
}
