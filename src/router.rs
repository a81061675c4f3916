use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{controller, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new()
        // Authentication
        .route("/api/auth/login", post(controller::auth::login))
        .route("/api/auth/register", post(controller::auth::register))
        .route("/api/auth/logout", get(controller::auth::logout))
        .route("/api/auth/user", get(controller::auth::get_user))
        // Public league site
        .route("/api/news", get(controller::public::list_news))
        .route("/api/news/{id}", get(controller::public::get_news))
        .route(
            "/api/standings/{grid}",
            get(controller::public::pilot_standings),
        )
        .route(
            "/api/standings/{grid}/constructors",
            get(controller::public::constructor_standings),
        )
        .route("/api/calendar/{grid}", get(controller::public::calendar))
        .route(
            "/api/races/{id}/results",
            get(controller::public::race_results),
        )
        .route("/api/pilots", get(controller::public::list_pilots))
        .route("/api/pilots/{id}", get(controller::public::get_pilot))
        .route(
            "/api/pilots/{id}/career",
            get(controller::public::pilot_career),
        )
        .route("/api/teams", get(controller::public::list_teams))
        .route("/api/teams/{id}", get(controller::public::get_team))
        // Logged-in pilot
        .route(
            "/api/me",
            get(controller::me::get_profile).put(controller::me::update_profile),
        )
        .route("/api/races/{id}/checkin", post(controller::me::checkin))
        .route(
            "/api/races/{id}/absence",
            post(controller::me::declare_absence),
        )
        .route("/api/protests", post(controller::me::open_protest))
        .route("/api/me/protests", get(controller::me::my_protests))
        .route(
            "/api/protests/{id}/defense",
            post(controller::me::submit_defense),
        )
        .route(
            "/api/protests/{id}",
            delete(controller::me::withdraw_protest),
        )
        // Race direction: seasons and calendar
        .route(
            "/api/admin/seasons",
            get(controller::season::list_seasons).post(controller::season::create_season),
        )
        .route(
            "/api/admin/seasons/{id}/close",
            post(controller::season::close_season),
        )
        .route("/api/admin/races", post(controller::race::create_race))
        .route(
            "/api/admin/races/{id}",
            put(controller::race::update_race).delete(controller::race::delete_race),
        )
        .route(
            "/api/admin/races/{id}/registrations",
            get(controller::race::list_registrations),
        )
        .route(
            "/api/admin/races/{id}/results",
            post(controller::race::save_results),
        )
        .route(
            "/api/admin/races/{id}/grid-sheet",
            get(controller::race::grid_sheet),
        )
        // Race direction: pilots and teams
        .route(
            "/api/admin/pilots/{id}",
            put(controller::pilot::update_pilot).delete(controller::pilot::remove_pilot),
        )
        .route("/api/admin/teams", post(controller::team::create_team))
        .route(
            "/api/admin/teams/{id}",
            put(controller::team::update_team).delete(controller::team::delete_team),
        )
        // Race direction: tribunal
        .route(
            "/api/admin/protests",
            get(controller::protest::list_protests),
        )
        .route(
            "/api/admin/protests/{id}",
            get(controller::protest::get_protest).delete(controller::protest::delete_protest),
        )
        .route(
            "/api/admin/protests/{id}/votes",
            post(controller::protest::cast_vote),
        )
        .route(
            "/api/admin/protests/{id}/close",
            post(controller::protest::close_protest),
        )
        .route(
            "/api/admin/protests/{id}/reopen",
            post(controller::protest::reopen_protest),
        )
        // Race direction: seletiva, invites, news, dashboard
        .route(
            "/api/admin/seletiva",
            get(controller::seletiva::list_entries),
        )
        .route(
            "/api/admin/seletiva/times",
            post(controller::seletiva::record_time),
        )
        .route(
            "/api/admin/seletiva/times/{pilot_id}",
            delete(controller::seletiva::delete_entry),
        )
        .route("/api/admin/seletiva/close", post(controller::seletiva::close))
        .route(
            "/api/admin/invites",
            get(controller::invite::list_invites).post(controller::invite::create_invite),
        )
        .route(
            "/api/admin/invites/{id}",
            delete(controller::invite::delete_invite),
        )
        .route("/api/admin/news", post(controller::news::create_news))
        .route(
            "/api/admin/news/{id}",
            put(controller::news::update_news).delete(controller::news::delete_news),
        )
        .route("/api/admin/overview", get(controller::overview::get_overview))
        // Account management
        .route(
            "/api/admin/users",
            get(controller::user::list_users).post(controller::user::create_user),
        )
        .route(
            "/api/admin/users/{id}",
            put(controller::user::update_user).delete(controller::user::delete_user),
        )
}
