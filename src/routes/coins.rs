use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse, Responder,
};

use crate::holder::CoinListHolder;

/// Current coin list state, e.g. `{"status":"success","data":[...]}`.
#[get("/coins")]
pub async fn coin_list(holder: web::Data<CoinListHolder>) -> impl Responder {
    HttpResponse::Ok().json(holder.current())
}

pub fn init(config: &mut ServiceConfig) {
    config.service(coin_list);
}
