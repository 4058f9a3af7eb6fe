use askama::Template;

use crate::models::user::{User, generate_map_url, links};
use super::PageContext;

/// One table row. Row activation, phone and website are separate targets.
pub struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub street_line: String,
    pub city_line: String,
    pub phone: String,
    pub tel_href: String,
    pub website: String,
    pub website_href: String,
    pub company_name: String,
    pub catch_phrase: String,
    pub select_href: String,
    pub delete_action: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id,
            name: u.name.clone(),
            email: u.email.clone(),
            street_line: u.address.street_line(),
            city_line: u.address.city_line(),
            phone: u.phone.clone(),
            tel_href: links::tel_href(&u.phone),
            website: u.website.clone(),
            website_href: links::website_href(&u.website),
            company_name: u.company.name.clone(),
            catch_phrase: u.company.catch_phrase.clone(),
            select_href: format!("/users/{}", u.id),
            delete_action: format!("/users/{}/delete", u.id),
        }
    }
}

/// Everything the detail modal shows for the selected user.
pub struct UserModalView {
    pub name: String,
    pub email: String,
    pub mailto_href: String,
    pub street_line: String,
    pub city_line: String,
    pub map_url: String,
    pub phone: String,
    pub website: String,
    pub website_href: String,
    pub company_name: String,
    pub catch_phrase: String,
    pub bs: String,
    pub close_href: String,
}

impl From<&User> for UserModalView {
    fn from(u: &User) -> Self {
        Self {
            name: u.name.clone(),
            email: u.email.clone(),
            mailto_href: links::mailto_href(&u.email),
            street_line: u.address.street_line(),
            city_line: u.address.city_line(),
            map_url: generate_map_url(&u.address.geo.lat, &u.address.geo.lng),
            phone: u.phone.clone(),
            website: u.website.clone(),
            website_href: links::website_href(&u.website),
            company_name: u.company.name.clone(),
            catch_phrase: u.company.catch_phrase.clone(),
            bs: u.company.bs.clone(),
            close_href: "/modal/close".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "directory/loading.html")]
pub struct LoadingTemplate {
    pub ctx: PageContext,
    pub refresh_secs: u32,
}

#[derive(Template)]
#[template(path = "directory/error.html")]
pub struct LoadErrorTemplate {
    pub ctx: PageContext,
    pub message: String,
}

#[derive(Template)]
#[template(path = "directory/list.html")]
pub struct DirectoryTemplate {
    pub ctx: PageContext,
    pub count_label: String,
    pub rows: Vec<UserRow>,
    /// `None` renders no modal markup at all.
    pub modal: Option<UserModalView>,
}

#[derive(Template)]
#[template(path = "directory/confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub ctx: PageContext,
    pub user_name: String,
    pub delete_action: String,
}
