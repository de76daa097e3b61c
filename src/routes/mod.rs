pub mod auth;
pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/auth").service(auth::login))
        .service(
            web::scope("/users")
                .service(users::list_users)
                .service(users::create_user)
                .service(users::get_user)
                .service(users::update_user)
                .service(users::delete_user),
        )
        .service(
            web::scope("/tasks")
                .service(tasks::list_tasks)
                .service(tasks::create_task)
                // `/user` must be registered before `/{id}`
                .service(tasks::get_user_tasks)
                .service(tasks::get_task)
                .service(tasks::update_task_status)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        );
}
