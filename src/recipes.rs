use once_cell::sync::Lazy;

use crate::models::{Ingredient, Recipe};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipeKey {
    Pasta,
    Chicken,
    Salad,
    Cake,
    Default,
}

impl RecipeKey {
    pub fn as_str(self) -> &'static str {
        match self {
            RecipeKey::Pasta => "pasta",
            RecipeKey::Chicken => "chicken",
            RecipeKey::Salad => "salad",
            RecipeKey::Cake => "cake",
            RecipeKey::Default => "default",
        }
    }
}

/// The fixed set of records the endpoint can return. Built once, never mutated.
pub struct RecipeBook {
    pasta: Recipe,
    chicken: Recipe,
    salad: Recipe,
    cake: Recipe,
    default: Recipe,
}

impl RecipeBook {
    pub fn lookup(&self, key: RecipeKey) -> &Recipe {
        match key {
            RecipeKey::Pasta => &self.pasta,
            RecipeKey::Chicken => &self.chicken,
            RecipeKey::Salad => &self.salad,
            RecipeKey::Cake => &self.cake,
            RecipeKey::Default => &self.default,
        }
    }
}

pub static RECIPES: Lazy<RecipeBook> = Lazy::new(|| RecipeBook {
    pasta: recipe(
        "Creamy Tomato & Basil Pasta",
        "A rich, velvety tomato sauce clinging to perfectly cooked pasta, finished with fresh fragrant basil.",
        &[
            ("Penne Pasta", "500g", "Pantry"),
            ("Tomato Puree", "400g", "Pantry"),
            ("Heavy Cream", "200ml", "Dairy"),
            ("Garlic", "3 cloves", "Produce"),
            ("Fresh Basil", "1 bunch", "Produce"),
            ("Parmesan Cheese", "50g", "Dairy"),
        ],
        &[
            "Bring a large pot of salted water to a boil and cook pasta until al dente.",
            "In a saucepan, sauté minced garlic in olive oil until fragrant.",
            "Add tomato puree and simmer for 10 minutes on low heat.",
            "Stir in the heavy cream and half the parmesan. Season with salt and pepper.",
            "Toss the cooked pasta with the sauce.",
            "Serve hot, garnished with fresh basil leaves and remaining parmesan.",
        ],
        ("10 mins", "15 mins"),
        4,
    ),
    chicken: recipe(
        "Classic Butter Chicken",
        "Tender chicken pieces simmered in a creamy, spiced tomato curry sauce. A crowd favorite.",
        &[
            ("Chicken Breast", "500g", "Meat"),
            ("Butter", "50g", "Dairy"),
            ("Tomato Paste", "2 tbsp", "Pantry"),
            ("Garam Masala", "2 tsp", "Pantry"),
            ("Heavy Cream", "1 cup", "Dairy"),
            ("Ginger Garlic Paste", "1 tbsp", "Pantry"),
        ],
        &[
            "Marinate chicken cubes with ginger garlic paste and salt for 30 mins.",
            "Pan-fry the chicken in butter until golden brown.",
            "Add tomato paste, garam masala, and cream. Simmer for 15 minutes.",
            "Finish with a knob of butter and serve with naan or rice.",
        ],
        ("20 mins", "30 mins"),
        4,
    ),
    salad: recipe(
        "Mediterranean Quinoa Salad",
        "A refreshing, nutrient-packed salad with quinoa, crisp vegetables, and a zesty lemon dressing.",
        &[
            ("Quinoa", "1 cup", "Pantry"),
            ("Cucumber", "1 medium", "Produce"),
            ("Cherry Tomatoes", "1 cup", "Produce"),
            ("Feta Cheese", "100g", "Dairy"),
            ("Olives", "1/2 cup", "Pantry"),
            ("Lemon Juice", "2 tbsp", "Pantry"),
        ],
        &[
            "Rinse quinoa and cook in water according to package instructions. Let cool.",
            "Dice cucumber and halve the cherry tomatoes.",
            "In a large bowl, combine quinoa, veggies, olives, and crumbled feta.",
            "Drizzle with olive oil and lemon juice. Toss gently to combine.",
        ],
        ("15 mins", "15 mins"),
        2,
    ),
    cake: recipe(
        "Molten Chocolate Lava Cake",
        "Decadent individual chocolate cakes with a gooey, flowing center.",
        &[
            ("Dark Chocolate", "100g", "Pantry"),
            ("Butter", "100g", "Dairy"),
            ("Eggs", "2", "Dairy"),
            ("Sugar", "1/2 cup", "Pantry"),
            ("Flour", "2 tbsp", "Pantry"),
        ],
        &[
            "Preheat oven to 200°C (400°F). Grease ramekins.",
            "Melt chocolate and butter together.",
            "Whisk eggs and sugar until pale, then fold into the chocolate mix.",
            "Sift in flour and fold gently.",
            "Pour into ramekins and bake for 12-14 minutes. Center should still be wobbly.",
        ],
        ("15 mins", "12 mins"),
        2,
    ),
    default: recipe(
        "Chef's Special: Grilled Salmon",
        "Perfectly grilled salmon fillet with a lemon butter glaze and roasted asparagus.",
        &[
            ("Salmon Fillet", "2 pieces", "Meat"),
            ("Asparagus", "1 bunch", "Produce"),
            ("Butter", "3 tbsp", "Dairy"),
            ("Lemon", "1", "Produce"),
            ("Garlic Powder", "1 tsp", "Pantry"),
        ],
        &[
            "Season salmon with salt, pepper, and garlic powder.",
            "Grill salmon for 4-5 minutes per side.",
            "In a small pan, melt butter with lemon juice.",
            "Roast asparagus in the oven with olive oil for 10 minutes.",
            "Pour lemon butter over salmon and serve with asparagus.",
        ],
        ("5 mins", "15 mins"),
        2,
    ),
});

/// `times` is `(prep, cook)`.
fn recipe(
    title: &str,
    description: &str,
    ingredients: &[(&str, &str, &str)],
    instructions: &[&str],
    times: (&str, &str),
    servings: u32,
) -> Recipe {
    Recipe {
        title: title.to_string(),
        description: description.to_string(),
        ingredients: ingredients
            .iter()
            .map(|&(name, amount, category)| Ingredient {
                name: name.to_string(),
                amount: amount.to_string(),
                category: category.to_string(),
            })
            .collect(),
        instructions: instructions.iter().map(|s| s.to_string()).collect(),
        prep_time: times.0.to_string(),
        cook_time: times.1.to_string(),
        servings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RecipeKey; 5] = [
        RecipeKey::Pasta,
        RecipeKey::Chicken,
        RecipeKey::Salad,
        RecipeKey::Cake,
        RecipeKey::Default,
    ];

    #[test]
    fn every_key_resolves_to_a_distinct_record() {
        let titles: Vec<&str> = ALL
            .iter()
            .map(|&key| RECIPES.lookup(key).title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "Creamy Tomato & Basil Pasta",
                "Classic Butter Chicken",
                "Mediterranean Quinoa Salad",
                "Molten Chocolate Lava Cake",
                "Chef's Special: Grilled Salmon",
            ]
        );
    }

    #[test]
    fn records_are_well_formed() {
        for key in ALL {
            let r = RECIPES.lookup(key);
            assert!(r.servings > 0, "{} has no servings", key.as_str());
            assert!(!r.ingredients.is_empty());
            assert!(!r.instructions.is_empty());
        }
    }

    #[test]
    fn ingredient_and_step_order_is_preserved() {
        let pasta = RECIPES.lookup(RecipeKey::Pasta);
        assert_eq!(pasta.ingredients[0].name, "Penne Pasta");
        assert_eq!(pasta.ingredients[5].name, "Parmesan Cheese");
        assert_eq!(pasta.instructions.len(), 6);
        assert!(pasta.instructions[5].starts_with("Serve hot"));

        let salmon = RECIPES.lookup(RecipeKey::Default);
        assert_eq!(salmon.prep_time, "5 mins");
        assert_eq!(salmon.cook_time, "15 mins");
        assert_eq!(salmon.ingredients[1].category, "Produce");
    }

    #[test]
    fn serializes_with_camel_case_timing_fields() {
        let value = serde_json::to_value(RECIPES.lookup(RecipeKey::Cake)).unwrap();
        assert_eq!(value["prepTime"], "15 mins");
        assert_eq!(value["cookTime"], "12 mins");
        assert_eq!(value["servings"], 2);
        assert_eq!(value["ingredients"][2]["amount"], "2");
    }
}
