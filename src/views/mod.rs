// ABOUTME: Server-side HTML rendering for recipe, liked, about, contact, and error pages
// ABOUTME: Fills compile-time embedded templates with escaped values in a single pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Page Rendering
//!
//! Templates are embedded with `include_str!` and filled by [`fill`], which
//! substitutes `{{KEY}}` placeholders in one pass so placeholder-like text in
//! user input is never expanded. Every interpolated value is HTML escaped,
//! except the provider's recipe summary, which is trusted provider HTML.

use crate::database::{ContactMessageForm, FieldError};
use crate::utils::html::{escape_html_attribute, escape_html_text};
use recipe_core::models::{DietFilter, LikedRecipe, RecipeDetails, RecipeSummary};
use std::fmt::Write;

const LAYOUT_TEMPLATE: &str = include_str!("../../templates/layout.html");
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const RECIPES_TEMPLATE: &str = include_str!("../../templates/recipes.html");
const RECIPE_TEMPLATE: &str = include_str!("../../templates/recipe.html");
const LIKED_TEMPLATE: &str = include_str!("../../templates/liked.html");
const ABOUT_TEMPLATE: &str = include_str!("../../templates/about.html");
const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Replace `{{KEY}}` placeholders in one pass; unknown keys are left as-is
#[must_use]
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}

/// Data for the landing/search page
pub struct IndexPage<'a, R> {
    /// Raw search text as typed (may be empty)
    pub search_query: &'a str,
    /// Heading describing what is shown
    pub display_query: &'a str,
    /// Selected diet
    pub diet: DietFilter,
    /// Recipes to show
    pub recipes: &'a [R],
}

/// Data for the filtered listing page
pub struct RecipesPage<'a, R> {
    /// Heading describing what is shown
    pub display_query: &'a str,
    /// Selected diet
    pub diet: DietFilter,
    /// Cuisine filter text
    pub cuisine: &'a str,
    /// Meal type filter text
    pub meal_type: &'a str,
    /// Recipes to show
    pub recipes: &'a [R],
}

/// Contact page state
pub struct ContactPage<'a> {
    /// Values to re-fill the form with
    pub form: &'a ContactMessageForm,
    /// Validation failures
    pub errors: &'a [FieldError],
    /// Whether a message was just stored
    pub sent: bool,
}

/// Renders full HTML pages
pub struct PageRenderer;

impl PageRenderer {
    /// Wrap page content in the site layout
    #[must_use]
    pub fn layout(title: &str, csrf_token: &str, content: &str) -> String {
        fill(
            LAYOUT_TEMPLATE,
            &[
                ("TITLE", &*escape_html_text(title)),
                ("CSRF_TOKEN", &*escape_html_attribute(csrf_token)),
                ("CONTENT", content),
            ],
        )
    }

    /// Landing page with search form and results
    #[must_use]
    pub fn index<R: RecipeSummary>(page: &IndexPage<'_, R>, csrf_token: &str) -> String {
        let content = fill(
            INDEX_TEMPLATE,
            &[
                ("SEARCH_QUERY", &*escape_html_attribute(page.search_query)),
                ("DIET_OPTIONS", &*diet_options(page.diet)),
                ("DISPLAY_QUERY", &*escape_html_text(page.display_query)),
                ("RECIPE_CARDS", &*recipe_cards(page.recipes)),
            ],
        );
        Self::layout("Home", csrf_token, &content)
    }

    /// Filtered listing page
    #[must_use]
    pub fn recipes<R: RecipeSummary>(page: &RecipesPage<'_, R>, csrf_token: &str) -> String {
        let content = fill(
            RECIPES_TEMPLATE,
            &[
                ("DIET_OPTIONS", &*diet_options(page.diet)),
                ("CUISINE", &*escape_html_attribute(page.cuisine)),
                ("MEAL_TYPE", &*escape_html_attribute(page.meal_type)),
                ("DISPLAY_QUERY", &*escape_html_text(page.display_query)),
                ("RECIPE_CARDS", &*recipe_cards(page.recipes)),
            ],
        );
        Self::layout("Recipes", csrf_token, &content)
    }

    /// Recipe detail page
    #[must_use]
    pub fn recipe_detail(details: &RecipeDetails, csrf_token: &str) -> String {
        let image = details.image().map_or_else(String::new, |uri| {
            format!(
                r#"            <img src="{}" alt="{}">"#,
                escape_html_attribute(uri),
                escape_html_attribute(details.title())
            )
        });

        let source_link = details.source_url.as_deref().map_or_else(String::new, |url| {
            format!(
                r#"            <p><a href="{}" target="_blank" rel="noopener noreferrer">View original recipe</a></p>"#,
                escape_html_attribute(url)
            )
        });

        let content = fill(
            RECIPE_TEMPLATE,
            &[
                ("RECIPE_TITLE", &*escape_html_attribute(details.title())),
                ("DIET_BADGE", &*diet_badge(details.is_vegetarian())),
                ("RECIPE_IMAGE", &*image),
                ("RECIPE_ID", &*details.id().to_string()),
                (
                    "RECIPE_IMAGE_URI",
                    &*escape_html_attribute(details.image().unwrap_or_default()),
                ),
                ("IS_VEGETARIAN", bool_str(details.is_vegetarian())),
                ("SUMMARY", details.summary.as_deref().unwrap_or_default()),
                ("INGREDIENTS", &*ingredient_list(details)),
                ("INSTRUCTIONS", &*instruction_list(details)),
                ("SOURCE_LINK", &*source_link),
            ],
        );
        Self::layout(details.title(), csrf_token, &content)
    }

    /// Liked recipes page
    #[must_use]
    pub fn liked(liked: &[LikedRecipe], diet: DietFilter, csrf_token: &str) -> String {
        let cards = if liked.is_empty() {
            r#"        <p class="empty">You haven't liked any recipes yet.</p>"#.to_owned()
        } else {
            let mut html = String::from("        <div class=\"grid\">\n");
            for like in liked {
                html.push_str(&liked_card(like));
            }
            html.push_str("        </div>");
            html
        };

        let content = fill(
            LIKED_TEMPLATE,
            &[
                ("DIET_OPTIONS", &*diet_options(diet)),
                ("LIKED_CARDS", &*cards),
            ],
        );
        Self::layout("Your Liked Recipes", csrf_token, &content)
    }

    /// Static about page
    #[must_use]
    pub fn about(csrf_token: &str) -> String {
        Self::layout("About Recipe Book", csrf_token, ABOUT_TEMPLATE)
    }

    /// Contact form, optionally with errors or a confirmation
    #[must_use]
    pub fn contact(page: &ContactPage<'_>, csrf_token: &str) -> String {
        let flash = if page.sent {
            r#"        <div class="flash success">Thank you! Your message has been sent.</div>"#
                .to_owned()
        } else if page.errors.is_empty() {
            String::new()
        } else {
            r#"        <div class="flash error">Please correct the errors below.</div>"#.to_owned()
        };

        let field_error = |field: &str| {
            page.errors
                .iter()
                .filter(|e| e.field == field)
                .fold(String::new(), |mut html, e| {
                    let _ = writeln!(
                        html,
                        r#"                <span class="error">{}</span>"#,
                        escape_html_text(&e.message)
                    );
                    html
                })
        };

        let content = fill(
            CONTACT_TEMPLATE,
            &[
                ("FLASH", &*flash),
                ("CSRF_TOKEN", &*escape_html_attribute(csrf_token)),
                ("NAME", &*escape_html_attribute(&page.form.name)),
                ("EMAIL", &*escape_html_attribute(&page.form.email)),
                ("SUBJECT", &*escape_html_attribute(&page.form.subject)),
                ("MESSAGE", &*escape_html_text(&page.form.message)),
                ("NAME_ERROR", &*field_error("name")),
                ("EMAIL_ERROR", &*field_error("email")),
                ("SUBJECT_ERROR", &*field_error("subject")),
                ("MESSAGE_ERROR", &*field_error("message")),
            ],
        );
        Self::layout("Contact Us", csrf_token, &content)
    }

    /// Generic error page
    #[must_use]
    pub fn error(title: &str, message: &str, csrf_token: &str) -> String {
        let content = fill(
            ERROR_TEMPLATE,
            &[
                ("ERROR_TITLE", &*escape_html_text(title)),
                ("ERROR_MESSAGE", &*escape_html_text(message)),
            ],
        );
        Self::layout(title, csrf_token, &content)
    }

    /// Page shown when a recipe cannot be found
    #[must_use]
    pub fn not_found(csrf_token: &str) -> String {
        Self::error(
            "Recipe not found",
            "We couldn't load that recipe. It may not exist, or the recipe service is unavailable.",
            csrf_token,
        )
    }
}

const fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

fn diet_options(current: DietFilter) -> String {
    [
        (DietFilter::All, "All Diets"),
        (DietFilter::Vegetarian, "Vegetarian"),
        (DietFilter::NonVegetarian, "Non-Vegetarian"),
    ]
    .iter()
    .fold(String::new(), |mut html, (diet, label)| {
        let value = if *diet == DietFilter::All {
            ""
        } else {
            diet.as_str()
        };
        let selected = if *diet == current { " selected" } else { "" };
        let _ = writeln!(
            html,
            r#"                <option value="{value}"{selected}>{label}</option>"#
        );
        html
    })
}

fn diet_badge(is_vegetarian: bool) -> String {
    if is_vegetarian {
        r#"<span class="badge">Vegetarian</span>"#.to_owned()
    } else {
        r#"<span class="badge meat">Non-Vegetarian</span>"#.to_owned()
    }
}

fn card_image(image: Option<&str>, title: &str) -> String {
    image.map_or_else(String::new, |uri| {
        format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            escape_html_attribute(uri),
            escape_html_attribute(title)
        )
    })
}

fn recipe_cards<R: RecipeSummary>(recipes: &[R]) -> String {
    if recipes.is_empty() {
        return r#"        <p class="empty">No recipes found. Try a different search.</p>"#.to_owned();
    }

    let mut html = String::from("        <div class=\"grid\">\n");
    for recipe in recipes {
        let title = escape_html_attribute(recipe.title());
        let _ = writeln!(
            html,
            r#"            <div class="card">
                <a href="/recipes/{id}">{image}</a>
                <div class="body">
                    <h3><a href="/recipes/{id}">{title}</a></h3>
                    <div>{badge}</div>
                    <button type="button" data-like data-recipe-id="{id}" data-recipe-title="{title}" data-recipe-image="{image_uri}" data-vegetarian="{vegetarian}">Like</button>
                </div>
            </div>"#,
            id = recipe.id(),
            image = card_image(recipe.image(), recipe.title()),
            badge = diet_badge(recipe.is_vegetarian()),
            image_uri = escape_html_attribute(recipe.image().unwrap_or_default()),
            vegetarian = bool_str(recipe.is_vegetarian()),
        );
    }
    html.push_str("        </div>");
    html
}

fn liked_card(like: &LikedRecipe) -> String {
    format!(
        r#"            <div class="card">
                <a href="/recipes/{recipe_id}">{image}</a>
                <div class="body">
                    <h3><a href="/recipes/{recipe_id}">{title}</a></h3>
                    <div>{badge}</div>
                    <small>Liked {date}</small>
                    <button type="button" class="secondary" data-unlike data-liked-id="{id}">Remove</button>
                </div>
            </div>
"#,
        recipe_id = like.recipe_id,
        id = like.id,
        image = card_image(like.recipe_image_uri.as_deref(), &like.recipe_title),
        title = escape_html_text(&like.recipe_title),
        badge = diet_badge(like.is_vegetarian),
        date = like.date_liked.format("%b %-d, %Y"),
    )
}

fn ingredient_list(details: &RecipeDetails) -> String {
    let mut lines = details.ingredient_lines().peekable();
    if lines.peek().is_none() {
        return r#"            <p class="empty">No ingredient list available.</p>"#.to_owned();
    }

    let mut html = String::from("            <ul>\n");
    for line in lines {
        let _ = writeln!(html, "                <li>{}</li>", escape_html_text(line));
    }
    html.push_str("            </ul>");
    html
}

fn instruction_list(details: &RecipeDetails) -> String {
    let steps: Vec<_> = details
        .instructions()
        .iter()
        .flat_map(|instruction| instruction.steps.iter())
        .collect();
    if steps.is_empty() {
        return r#"            <p class="empty">No instructions available.</p>"#.to_owned();
    }

    let mut html = String::from("            <ol>\n");
    for step in steps {
        let _ = writeln!(html, "                <li>{}</li>", escape_html_text(&step.step));
    }
    html.push_str("            </ol>");
    html
}
