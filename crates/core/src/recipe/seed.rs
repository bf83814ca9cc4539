//! Built-in sample recipes.
//!
//! A fresh install is seeded with these so the list screen is never empty.
//! Ids are fixed: when two near-simultaneous first launches both try to
//! seed, the second insert of each record loses on the primary key and the
//! seeding routine skips it instead of duplicating content.

use super::types::Recipe;

/// Returns the built-in sample set, in display order.
///
/// Each call builds fresh records with seed-time timestamps; the fixed ids
/// are what make repeated seeding converge.
pub fn builtin_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Buttermilk Pancakes",
            "Fluffy weekend pancakes with a golden crust. Serve with maple syrup and berries.",
        )
        .with_id("builtin-buttermilk-pancakes")
        .with_times(10, 15)
        .with_servings(4)
        .with_calories(420)
        .with_ingredients([
            "2 cups all-purpose flour",
            "2 tbsp sugar",
            "1 tsp baking powder",
            "1/2 tsp baking soda",
            "1/2 tsp salt",
            "2 cups buttermilk",
            "2 eggs",
            "3 tbsp melted butter",
        ])
        .with_instructions([
            "Whisk the dry ingredients together in a large bowl",
            "Beat the buttermilk, eggs and melted butter in a second bowl",
            "Fold the wet mix into the dry mix until just combined",
            "Ladle onto a medium-hot buttered griddle",
            "Flip when bubbles form and cook until golden on both sides",
        ]),
        Recipe::new(
            "Spaghetti Bolognese",
            "Slow-simmered beef and tomato ragu over spaghetti, finished with parmesan.",
        )
        .with_id("builtin-spaghetti-bolognese")
        .with_times(15, 45)
        .with_servings(4)
        .with_calories(650)
        .with_ingredients([
            "400 g spaghetti",
            "500 g ground beef",
            "1 onion, finely chopped",
            "2 cloves garlic, minced",
            "1 carrot, grated",
            "800 g canned chopped tomatoes",
            "2 tbsp tomato paste",
            "1 glass red wine",
            "Parmesan, to serve",
        ])
        .with_instructions([
            "Soften the onion, garlic and carrot in olive oil",
            "Add the beef and brown it, breaking it up as it cooks",
            "Stir in the tomato paste, then deglaze with the wine",
            "Add the tomatoes and simmer gently for 40 minutes",
            "Cook the spaghetti until al dente and toss with the sauce",
            "Serve topped with grated parmesan",
        ]),
        Recipe::new(
            "Thai Green Curry",
            "Fragrant coconut curry with chicken, green beans and basil.",
        )
        .with_id("builtin-thai-green-curry")
        .with_times(20, 25)
        .with_servings(4)
        .with_calories(580)
        .with_ingredients([
            "500 g chicken thigh, sliced",
            "3 tbsp green curry paste",
            "400 ml coconut milk",
            "150 g green beans",
            "2 kaffir lime leaves",
            "1 tbsp fish sauce",
            "1 tsp palm sugar",
            "Thai basil, a handful",
            "Jasmine rice, to serve",
        ])
        .with_instructions([
            "Fry the curry paste in a splash of coconut milk until fragrant",
            "Add the chicken and coat it in the paste",
            "Pour in the remaining coconut milk and the lime leaves",
            "Simmer for 15 minutes, then add the green beans",
            "Season with fish sauce and palm sugar",
            "Stir through the basil and serve over rice",
        ]),
        Recipe::new(
            "Greek Salad",
            "Crisp cucumber, ripe tomatoes and feta under plenty of olive oil. No cooking required.",
        )
        .with_id("builtin-greek-salad")
        .with_times(15, 0)
        .with_servings(2)
        .with_calories(320)
        .with_ingredients([
            "4 ripe tomatoes, cut in wedges",
            "1 cucumber, thickly sliced",
            "1 red onion, thinly sliced",
            "200 g feta",
            "A handful of kalamata olives",
            "1 tsp dried oregano",
            "Extra virgin olive oil",
        ])
        .with_instructions([
            "Combine the tomatoes, cucumber, onion and olives in a bowl",
            "Lay the feta on top in one piece",
            "Sprinkle with oregano and pour over the olive oil",
        ]),
        Recipe::new(
            "Banana Bread",
            "A dense, moist loaf that rescues overripe bananas. Keeps for days.",
        )
        .with_id("builtin-banana-bread")
        .with_times(15, 60)
        .with_servings(8)
        .with_calories(310)
        .with_ingredients([
            "3 overripe bananas, mashed",
            "100 g melted butter",
            "150 g sugar",
            "1 egg, beaten",
            "1 tsp vanilla extract",
            "1 tsp baking soda",
            "A pinch of salt",
            "190 g all-purpose flour",
        ])
        .with_instructions([
            "Heat the oven to 175 C and butter a loaf tin",
            "Stir the melted butter into the mashed bananas",
            "Mix in the sugar, egg and vanilla",
            "Sprinkle over the baking soda and salt, then fold in the flour",
            "Pour into the tin and bake for 55 to 60 minutes",
            "Cool in the tin before slicing",
        ]),
    ]
}
