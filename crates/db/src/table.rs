use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Recipe {
    Table,
    Id,
    Name,
    Calories,
    Protein,
    Fat,
    Carbs,
    PrepTime,
    CookTime,
    Servings,
    Diet,
    Image,
    HealthScore,
    Cost,
    Allergies,
}

#[derive(Iden, Clone)]
pub enum Ingredient {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    IngredientId,
    Quantity,
    Unit,
}

#[derive(Iden, Clone)]
pub enum MealPlanEntry {
    Table,
    UserId,
    Date,
    MealLabel,
    RecipeId,
    Servings,
    Calories,
    Protein,
    Fat,
    Carbs,
}
