use log::info;
use crate::backoffice::controller::error::ScreenError;
use crate::backoffice::controller::fetch_or_notice;
use crate::backoffice::model::item::MenuItem;
use crate::backoffice::model::notice::{NoticeKind, Notices};
use crate::backoffice::model::order::PizzaOrderDraft;
use crate::backoffice::normalize::collection::normalize_all;
use crate::backoffice::normalize::{PIZZA_SIZES, TOPPINGS};
use crate::backoffice::transport::client::ApiClient;
use crate::backoffice::util::time::today_iso;

const SUBMIT_ENDPOINT: &str = "/insertpizzaorder";

/// Pizza sales entry.
pub(crate) struct PizzaSales {
    pub sizes: Vec<MenuItem>,
    pub toppings: Vec<MenuItem>,
    pub draft: PizzaOrderDraft,
    pub notices: Notices,
}

impl PizzaSales {
    pub async fn load(api: &ApiClient) -> Result<Self, ScreenError> {
        let mut notices = Notices::default();
        let sizes = fetch_or_notice(api, PIZZA_SIZES, "sizes", &mut notices).await?;
        let toppings = fetch_or_notice(api, TOPPINGS, "toppings", &mut notices).await?;
        Ok(Self {
            sizes: normalize_all(sizes.as_ref(), PIZZA_SIZES.tuple_keys),
            toppings: normalize_all(toppings.as_ref(), TOPPINGS.tuple_keys),
            draft: PizzaOrderDraft::new(today_iso()),
            notices,
        })
    }

    pub fn select_size(&mut self, size_id: i64) -> Result<(), ScreenError> {
        if !self.sizes.iter().any(|s| s.id == size_id) {
            return Err(ScreenError::UnknownItem(size_id));
        }
        self.draft.select_size(size_id);
        Ok(())
    }

    pub fn toggle_topping(&mut self, topping_id: i64) -> Result<bool, ScreenError> {
        if !self.toppings.iter().any(|t| t.id == topping_id) {
            return Err(ScreenError::UnknownItem(topping_id));
        }
        Ok(self.draft.toggle_topping(topping_id))
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Result<(), ScreenError> {
        let submission = self.draft.submission()?;
        info!(
            "submitting pizza order: sizeId={}, toppingIds={:?}, orderDate={}",
            submission.sizeid, submission.toppingids, submission.orderdate
        );
        api.post(SUBMIT_ENDPOINT, &submission).await?;
        self.notices.push(NoticeKind::Success, "Pizza order submitted successfully!");
        self.draft.reset(today_iso());
        Ok(())
    }
}
