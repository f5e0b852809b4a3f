//! Demo data for local development, loaded with `kondate-server --seed`.

use diesel::prelude::*;
use kondate_core::{append_positions, ChefRole, RecipeStatus, SiteType};
use uuid::Uuid;

use crate::models::{
    NewChef, NewFollow, NewLike, NewLink, NewRecipe, NewRecipeImage, NewRecipeIngredient,
    NewRecipeLink, NewRecipeStep, NewShoppingList, NewShoppingListIngredient, NewShoppingMemo,
    NewUser,
};
use crate::schema::{
    chefs, follows, likes, links, recipe_images, recipe_ingredients, recipe_links, recipe_steps,
    recipes, shopping_list_ingredients, shopping_lists, shopping_memos, users,
};

const ALICE_GOOGLE_ID: &str = "seed-alice";
const BOB_GOOGLE_ID: &str = "seed-bob";

struct SeedRecipe {
    name: &'static str,
    overview: &'static str,
    serving_size: i32,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    image_url: &'static str,
    link: Option<&'static str>,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Miso Soup",
        overview: "Everyday soup with tofu and wakame.",
        serving_size: 2,
        ingredients: &[
            "dashi 400ml",
            "miso 2 tbsp",
            "silken tofu 150g",
            "dried wakame 1 tsp",
            "green onion",
        ],
        steps: &[
            "Warm the dashi without letting it boil.",
            "Add tofu cubes and wakame.",
            "Dissolve the miso off the heat and top with green onion.",
        ],
        image_url: "https://images.example.com/miso-soup.jpg",
        link: Some("https://www.youtube.com/watch?v=miso-soup"),
    },
    SeedRecipe {
        name: "Oyakodon",
        overview: "Chicken and egg simmered in a sweet soy broth over rice.",
        serving_size: 2,
        ingredients: &[
            "chicken thigh 250g",
            "eggs 3",
            "onion 1/2",
            "soy sauce 2 tbsp",
            "mirin 2 tbsp",
            "cooked rice 2 bowls",
        ],
        steps: &[
            "Simmer sliced onion in soy sauce, mirin and water.",
            "Add bite-sized chicken and cook through.",
            "Pour in beaten eggs, cover briefly and serve over rice.",
        ],
        image_url: "https://images.example.com/oyakodon.jpg",
        link: None,
    },
    SeedRecipe {
        name: "Cucumber Sunomono",
        overview: "Quick vinegared cucumber salad.",
        serving_size: 2,
        ingredients: &["cucumber 2", "rice vinegar 3 tbsp", "sugar 1 tbsp", "sesame seeds"],
        steps: &[
            "Slice the cucumbers thinly and salt them for five minutes.",
            "Squeeze out the water and dress with vinegar and sugar.",
        ],
        image_url: "https://images.example.com/sunomono.jpg",
        link: None,
    },
];

const SAMPLE_MEMOS: &[(&str, bool)] = &[
    ("toilet paper", false),
    ("dish soap", true),
    ("coffee beans", false),
];

/// Inserts the demo users, chefs, recipes and lists in one transaction.
///
/// Does nothing when the demo users already exist.
pub fn seed(conn: &mut PgConnection) -> QueryResult<()> {
    let already_seeded: i64 = users::table
        .filter(users::google_id.eq(ALICE_GOOGLE_ID))
        .count()
        .get_result(conn)?;
    if already_seeded > 0 {
        tracing::info!("Seed data already present, skipping");
        return Ok(());
    }

    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        let alice: Uuid = diesel::insert_into(users::table)
            .values(&NewUser {
                google_id: ALICE_GOOGLE_ID,
                email: Some("alice@example.com"),
                name: Some("Alice"),
            })
            .returning(users::id)
            .get_result(conn)?;
        let bob: Uuid = diesel::insert_into(users::table)
            .values(&NewUser {
                google_id: BOB_GOOGLE_ID,
                email: Some("bob@example.com"),
                name: Some("Bob"),
            })
            .returning(users::id)
            .get_result(conn)?;

        let alice_chef: Uuid = diesel::insert_into(chefs::table)
            .values(&NewChef {
                role: ChefRole::User.as_str(),
                user_id: Some(alice),
                name: "Alice Chef",
                profile: Some("Home cook sharing weeknight Japanese dishes."),
                image_url: None,
            })
            .returning(chefs::id)
            .get_result(conn)?;
        let pro_chef: Uuid = diesel::insert_into(chefs::table)
            .values(&NewChef {
                role: ChefRole::Chef.as_str(),
                user_id: None,
                name: "Kenji Tanaka",
                profile: Some("Restaurant chef and cooking video creator."),
                image_url: Some("https://images.example.com/kenji.jpg"),
            })
            .returning(chefs::id)
            .get_result(conn)?;

        diesel::insert_into(links::table)
            .values(&vec![
                NewLink {
                    chef_id: pro_chef,
                    site_type: SiteType::Youtube.as_str(),
                    account_name: Some("kenjicooks"),
                    url: "https://www.youtube.com/@kenjicooks",
                },
                NewLink {
                    chef_id: pro_chef,
                    site_type: SiteType::Instagram.as_str(),
                    account_name: Some("kenjicooks"),
                    url: "https://www.instagram.com/kenjicooks",
                },
                NewLink {
                    chef_id: alice_chef,
                    site_type: SiteType::Blog.as_str(),
                    account_name: None,
                    url: "https://alice.example.com",
                },
            ])
            .execute(conn)?;

        let mut recipe_ids = Vec::with_capacity(SAMPLE_RECIPES.len());
        for (i, sample) in SAMPLE_RECIPES.iter().enumerate() {
            let chef_id = if i == 0 { alice_chef } else { pro_chef };
            let recipe_id = insert_recipe(conn, chef_id, sample)?;
            recipe_ids.push(recipe_id);
        }

        diesel::insert_into(follows::table)
            .values(&vec![
                NewFollow {
                    user_id: alice,
                    chef_id: pro_chef,
                },
                NewFollow {
                    user_id: bob,
                    chef_id: pro_chef,
                },
                NewFollow {
                    user_id: bob,
                    chef_id: alice_chef,
                },
            ])
            .execute(conn)?;

        let like_rows: Vec<NewLike> = recipe_ids
            .iter()
            .map(|&recipe_id| NewLike {
                user_id: bob,
                recipe_id,
            })
            .chain(recipe_ids.get(1).map(|&recipe_id| NewLike {
                user_id: alice,
                recipe_id,
            }))
            .collect();
        diesel::insert_into(likes::table)
            .values(&like_rows)
            .execute(conn)?;

        if let Some((&recipe_id, sample)) = recipe_ids.get(1).zip(SAMPLE_RECIPES.get(1)) {
            let list_id: Uuid = diesel::insert_into(shopping_lists::table)
                .values(&NewShoppingList {
                    user_id: alice,
                    recipe_id: Some(recipe_id),
                    name: sample.name,
                    sort_order: 1,
                })
                .returning(shopping_lists::id)
                .get_result(conn)?;

            let rows: Vec<NewShoppingListIngredient> = append_positions(0, sample.ingredients.len())
                .zip(sample.ingredients.iter().copied())
                .map(|(sort_order, name)| NewShoppingListIngredient {
                    shopping_list_id: list_id,
                    name,
                    note: None,
                    is_bought: sort_order == 1,
                    sort_order,
                })
                .collect();
            diesel::insert_into(shopping_list_ingredients::table)
                .values(&rows)
                .execute(conn)?;
        }

        let memos: Vec<NewShoppingMemo> = append_positions(0, SAMPLE_MEMOS.len())
            .zip(SAMPLE_MEMOS.iter().copied())
            .map(|(sort_order, (text, is_bought))| NewShoppingMemo {
                user_id: alice,
                text,
                is_bought,
                sort_order,
            })
            .collect();
        diesel::insert_into(shopping_memos::table)
            .values(&memos)
            .execute(conn)?;

        tracing::info!(
            recipes = recipe_ids.len(),
            memos = memos.len(),
            "Seeded users Alice and Bob"
        );
        Ok(())
    })
}

fn insert_recipe(conn: &mut PgConnection, chef_id: Uuid, sample: &SeedRecipe) -> QueryResult<Uuid> {
    let recipe_id: Uuid = diesel::insert_into(recipes::table)
        .values(&NewRecipe {
            chef_id,
            name: sample.name,
            overview: Some(sample.overview),
            serving_size: sample.serving_size,
            status: RecipeStatus::Public.as_str(),
        })
        .returning(recipes::id)
        .get_result(conn)?;

    let ingredients: Vec<NewRecipeIngredient> = append_positions(0, sample.ingredients.len())
        .zip(sample.ingredients.iter().copied())
        .map(|(sort_order, text)| NewRecipeIngredient {
            recipe_id,
            text,
            sort_order,
        })
        .collect();
    diesel::insert_into(recipe_ingredients::table)
        .values(&ingredients)
        .execute(conn)?;

    let steps: Vec<NewRecipeStep> = append_positions(0, sample.steps.len())
        .zip(sample.steps.iter().copied())
        .map(|(step_order, description)| NewRecipeStep {
            recipe_id,
            step_order,
            description,
            note: None,
        })
        .collect();
    diesel::insert_into(recipe_steps::table)
        .values(&steps)
        .execute(conn)?;

    diesel::insert_into(recipe_images::table)
        .values(&NewRecipeImage {
            recipe_id,
            image_url: sample.image_url,
        })
        .execute(conn)?;

    if let Some(url) = sample.link {
        diesel::insert_into(recipe_links::table)
            .values(&NewRecipeLink { recipe_id, url })
            .execute(conn)?;
    }

    tracing::debug!(recipe_id = %recipe_id, name = sample.name, "Seeded recipe");
    Ok(recipe_id)
}
