use anyhow::Result;
use macroplan::config::Config;
use macroplan_mealplan::{GenerateInput, MealCount, Planner};
use macroplan_recipe::DietSelection;
use rand::{SeedableRng, rngs::StdRng};

pub struct GenerateArgs {
    pub diet: DietSelection,
    pub calories: f64,
    pub time: u32,
    pub meal_count: u8,
    pub user_id: Option<String>,
    pub date: Option<String>,
    pub seed: Option<u64>,
}

/// Generate one plan against the configured database and print it as JSON
pub async fn generate(config: Config, args: GenerateArgs) -> Result<()> {
    let input = GenerateInput {
        diet: args.diet,
        calories: args.calories,
        time: args.time,
        meal_count: MealCount::try_from(args.meal_count).map_err(anyhow::Error::msg)?,
        user_id: args.user_id,
        date: args.date,
    };

    let pool = macroplan::db::create_pool(&config.database.url, 1).await?;
    let planner = Planner::new(config.planner);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let plan = {
        let mut conn = pool.acquire().await?;
        planner.generate(&mut *conn, &input, &mut rng).await?
    };

    println!("{}", serde_json::to_string_pretty(&plan)?);

    pool.close().await;

    Ok(())
}
