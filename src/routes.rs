use crate::{
    gateway::Gateway,
    pages::{attendance, employees, home},
};
use actix_web::web;

/// Registers every UI route for a backend gateway `G`. The caller provides
/// `web::Data<G>` and `web::Data<Pages>`.
pub fn configure<G: Gateway + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::show::<G>)))
        .service(web::resource("/healthz").route(web::get().to(home::healthz)));

    cfg.service(
        web::scope("/employees")
            // /employees
            .service(web::resource("").route(web::get().to(employees::show::<G>)))
            // /employees/create
            .service(web::resource("/create").route(web::post().to(employees::create::<G>)))
            // /employees/{employee_id}/delete
            .service(
                web::resource("/{employee_id}/delete")
                    .route(web::get().to(employees::confirm_delete))
                    .route(web::post().to(employees::delete::<G>)),
            ),
    )
    .service(
        web::scope("/attendance")
            // /attendance
            .service(web::resource("").route(web::get().to(attendance::show::<G>)))
            // /attendance/mark
            .service(web::resource("/mark").route(web::post().to(attendance::mark::<G>)))
            // /attendance/select
            .service(web::resource("/select").route(web::post().to(attendance::select))),
    );
}
