use log::{info, warn};
use crate::backoffice::controller::error::ScreenError;
use crate::backoffice::controller::fetch_or_notice;
use crate::backoffice::model::item::MenuItem;
use crate::backoffice::model::notice::{NoticeKind, Notices};
use crate::backoffice::model::order::OrderDraft;
use crate::backoffice::model::price::PriceMap;
use crate::backoffice::normalize::collection::normalize_all;
use crate::backoffice::normalize::price::build_price_map;
use crate::backoffice::normalize::{APPETIZERS, APPETIZER_PRICES};
use crate::backoffice::transport::client::ApiClient;
use crate::backoffice::util::time::today_iso;

const SUBMIT_ENDPOINT: &str = "/insertappetizerorder";

/// Appetizer sales entry.
pub(crate) struct AppetizerSales {
    pub appetizers: Vec<MenuItem>,
    pub prices: PriceMap,
    pub draft: OrderDraft,
    pub notices: Notices,
}

impl AppetizerSales {
    pub async fn load(api: &ApiClient) -> Result<Self, ScreenError> {
        let mut notices = Notices::default();
        let appetizers = fetch_or_notice(api, APPETIZERS, "appetizers", &mut notices).await?;
        let prices = fetch_or_notice(api, APPETIZER_PRICES, "prices", &mut notices).await?;

        let screen = Self {
            appetizers: normalize_all(appetizers.as_ref(), APPETIZERS.tuple_keys),
            prices: build_price_map(prices.as_ref(), APPETIZER_PRICES.tuple_keys),
            draft: OrderDraft::new(today_iso()),
            notices,
        };
        info!(
            "loaded {} appetizers, {} prices",
            screen.appetizers.len(),
            screen.prices.len()
        );
        if screen.prices.is_empty() {
            warn!("no appetizer prices loaded, order totals will be 0");
        }
        Ok(screen)
    }

    /// Fill a line with an appetizer from the loaded menu. Picking an appetizer without a
    /// price raises an info notice, since the line is left out of the total.
    pub fn select(&mut self, local_id: f64, appetizer_id: i64) -> Result<(), ScreenError> {
        let Some(appetizer) = self.appetizers.iter().find(|a| a.id == appetizer_id) else {
            return Err(ScreenError::UnknownItem(appetizer_id));
        };
        self.draft.select_item(local_id, appetizer_id)?;
        if self.prices.get(appetizer_id).is_none() {
            let message = format!("No price listed for {}, it is not counted in the total", appetizer.description);
            self.notices.push(NoticeKind::Info, message);
        }
        Ok(())
    }

    pub fn total(&self) -> f64 {
        self.draft.total(&self.prices)
    }

    /// Send the draft once. On success the draft starts over for today.
    pub async fn submit(&mut self, api: &ApiClient) -> Result<(), ScreenError> {
        let submission = self.draft.submission(&self.prices)?;
        info!(
            "submitting appetizer order, date={}, lines={}, total={:.2}",
            submission.appetizerorderdate,
            submission.items.len(),
            submission.ordertotal
        );
        api.post(SUBMIT_ENDPOINT, &submission).await?;
        self.notices.push(NoticeKind::Success, "Appetizer order submitted successfully!");
        self.draft.reset(today_iso());
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::{Arc, Mutex};
    use actix_web::{web, HttpResponse};
    use serde_json::{json, Value};
    use super::*;
    use crate::backoffice::model::order::DraftError;
    use crate::backoffice::testing::{client_for, serve};
    use crate::backoffice::util::time::helper;

    fn menu(cfg: &mut web::ServiceConfig) {
        cfg.route("/appetizers", web::get().to(|| async {
            HttpResponse::Ok().json(json!([
                {"fn_GetAppetizers": "(3,\"Garlic Knots\")"},
                {"fn_GetAppetizers": "(8,\"Wings, hot\")"},
                {"fn_GetAppetizers": "(9)"},
            ]))
        }))
        .route("/appetizerprices", web::get().to(|| async {
            HttpResponse::Ok().json(json!({"data": [
                {"fn_GetAppetizerPrices": "(3,$5.00)"},
                {"AppetizerId": 8, "Price": "$7.50"},
            ]}))
        }));
    }

    #[actix_web::test]
    async fn order_two_lines_and_submit() {
        helper::set_utc_now(1_714_521_600);
        let seen = Arc::new(Mutex::new(Vec::<Value>::new()));
        let recorder = seen.clone();
        let (base, _srv) = serve(move |cfg| {
            menu(cfg);
            let recorder = recorder.clone();
            cfg.route(SUBMIT_ENDPOINT, web::post().to(move |body: web::Json<Value>| {
                recorder.lock().unwrap().push(body.into_inner());
                async { HttpResponse::Ok().json(json!({"ok": true})) }
            }));
        })
        .await;
        let (api, _dir) = client_for(&base, None);

        let mut screen = AppetizerSales::load(&api).await.unwrap();
        assert_eq!(
            screen.appetizers,
            vec![
                MenuItem { id: 3, description: "Garlic Knots".to_string() },
                MenuItem { id: 8, description: "Wings, hot".to_string() },
            ]
        );
        assert!(screen.notices.active().is_empty());

        let first = screen.draft.lines()[0].local_id;
        screen.select(first, 3).unwrap();
        screen.draft.set_quantity(first, 2).unwrap();
        let second = screen.draft.add_line();
        screen.select(second, 8).unwrap();
        assert!((screen.total() - 17.50).abs() < 1e-9);

        screen.submit(&api).await.unwrap();
        assert_eq!(
            *seen.lock().unwrap(),
            vec![json!({
                "appetizerorderdate": "2024-05-01",
                "items": [{"ingredientid": 3, "quantity": 2}, {"ingredientid": 8, "quantity": 1}],
                "ordertotal": 17.5,
            })]
        );
        assert_eq!(screen.draft.lines().len(), 1);
        assert_eq!(screen.notices.active()[0].kind, NoticeKind::Success);
    }

    #[actix_web::test]
    async fn unselected_line_is_not_sent() {
        let (base, _srv) = serve(menu).await;
        let (api, _dir) = client_for(&base, None);
        let mut screen = AppetizerSales::load(&api).await.unwrap();
        screen.draft.add_line();

        let err = screen.submit(&api).await.unwrap_err();
        assert!(matches!(err, ScreenError::Draft(DraftError::UnselectedItem)));
        assert_eq!(err.to_string(), "Please select an appetizer for all orders");
        assert_eq!(screen.draft.lines().len(), 2);
    }

    #[actix_web::test]
    async fn unknown_appetizer_is_refused() {
        let (base, _srv) = serve(menu).await;
        let (api, _dir) = client_for(&base, None);
        let mut screen = AppetizerSales::load(&api).await.unwrap();
        let first = screen.draft.lines()[0].local_id;
        assert!(matches!(screen.select(first, 9), Err(ScreenError::UnknownItem(9))));
    }

    #[actix_web::test]
    async fn price_failure_still_renders_menu() {
        let (base, _srv) = serve(|cfg| {
            cfg.route("/appetizers", web::get().to(|| async {
                HttpResponse::Ok().json(json!([{"id": 1, "name": "Bread"}]))
            }));
        })
        .await;
        let (api, _dir) = client_for(&base, None);
        let screen = AppetizerSales::load(&api).await.unwrap();
        assert_eq!(screen.appetizers.len(), 1);
        assert!(screen.prices.is_empty());
        let notices = screen.notices.active();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].message, "Error loading prices: HTTP error! status: 404");
    }

    #[actix_web::test]
    async fn unpriced_appetizer_raises_info_notice() {
        let (base, _srv) = serve(|cfg| {
            cfg.route("/appetizers", web::get().to(|| async {
                HttpResponse::Ok().json(json!([{"id": 1, "name": "Bread"}]))
            }))
            .route("/appetizerprices", web::get().to(|| async { HttpResponse::Ok().json(json!([])) }));
        })
        .await;
        let (api, _dir) = client_for(&base, None);
        let mut screen = AppetizerSales::load(&api).await.unwrap();
        let first = screen.draft.lines()[0].local_id;

        screen.select(first, 1).unwrap();
        assert_eq!(screen.total(), 0.0);
        let notices = screen.notices.active();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].kind, NoticeKind::Info);
        assert_eq!(notices[0].message, "No price listed for Bread, it is not counted in the total");
    }
}
