use chrono::{DateTime, Utc};
use diesel::prelude::*;
use kondate_core::{ChefKind, DomainError};
use uuid::Uuid;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct User {
    pub id: Uuid,
    pub google_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub google_id: &'a str,
    pub email: Option<&'a str>,
    pub name: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: Uuid,
    pub token_hash: &'a str,
    pub expires_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = crate::schema::chefs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Chef {
    pub id: Uuid,
    pub role: String,
    pub user_id: Option<Uuid>,
    pub name: String,
    pub profile: Option<String>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chef {
    pub fn kind(&self) -> Result<ChefKind, DomainError> {
        ChefKind::from_columns(&self.role, self.user_id)
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::chefs)]
pub struct NewChef<'a> {
    pub role: &'a str,
    pub user_id: Option<Uuid>,
    pub name: &'a str,
    pub profile: Option<&'a str>,
    pub image_url: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::links)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Link {
    pub id: Uuid,
    pub chef_id: Uuid,
    pub site_type: String,
    pub account_name: Option<String>,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::links)]
pub struct NewLink<'a> {
    pub chef_id: Uuid,
    pub site_type: &'a str,
    pub account_name: Option<&'a str>,
    pub url: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::follows)]
pub struct NewFollow {
    pub user_id: Uuid,
    pub chef_id: Uuid,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct Recipe {
    pub id: Uuid,
    pub chef_id: Uuid,
    pub name: String,
    pub overview: Option<String>,
    pub serving_size: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub chef_id: Uuid,
    pub name: &'a str,
    pub overview: Option<&'a str>,
    pub serving_size: i32,
    pub status: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeImage {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_images)]
pub struct NewRecipeImage<'a> {
    pub recipe_id: Uuid,
    pub image_url: &'a str,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_steps)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeStep {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub step_order: i32,
    pub description: String,
    pub note: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_steps)]
pub struct NewRecipeStep<'a> {
    pub recipe_id: Uuid,
    pub step_order: i32,
    pub description: &'a str,
    pub note: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub text: String,
    pub sort_order: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredient<'a> {
    pub recipe_id: Uuid,
    pub text: &'a str,
    pub sort_order: i32,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_links)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct RecipeLink {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub url: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_links)]
pub struct NewRecipeLink<'a> {
    pub recipe_id: Uuid,
    pub url: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::likes)]
pub struct NewLike {
    pub user_id: Uuid,
    pub recipe_id: Uuid,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub recipe_id: Option<Uuid>,
    pub name: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shopping_lists)]
pub struct NewShoppingList<'a> {
    pub user_id: Uuid,
    pub recipe_id: Option<Uuid>,
    pub name: &'a str,
    pub sort_order: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::shopping_list_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct ShoppingListIngredient {
    pub id: Uuid,
    pub shopping_list_id: Uuid,
    pub name: String,
    pub note: Option<String>,
    pub is_bought: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shopping_list_ingredients)]
pub struct NewShoppingListIngredient<'a> {
    pub shopping_list_id: Uuid,
    pub name: &'a str,
    pub note: Option<&'a str>,
    pub is_bought: bool,
    pub sort_order: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::shopping_memos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
#[allow(dead_code)]
pub struct ShoppingMemo {
    pub id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub is_bought: bool,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shopping_memos)]
pub struct NewShoppingMemo<'a> {
    pub user_id: Uuid,
    pub text: &'a str,
    pub is_bought: bool,
    pub sort_order: i32,
}
