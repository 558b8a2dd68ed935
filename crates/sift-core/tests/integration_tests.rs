//! Integration tests for sift-core
//!
//! These tests exercise the full CSV → categorize → analyze workflow.

use chrono::NaiveDate;
use sift_core::{
    analyze_budget, category_breakdown, evaluate_budgets, load_transactions, parse_budgets,
    recommend, split_windows,
    models::category,
    BudgetStatus, Categorizer, InsightGenerator, InsightKind, Period, Priority,
    SubscriptionDetector, SubscriptionSummary, TransactionInput,
};

/// Two months of uncategorized activity plus a few older charges
///
/// With as_of = 2024-06-30 and 30-day windows:
/// - current (Jun 1..=Jun 30): dining 430, shopping 320, transport 45, streaming 15.49
/// - previous (May 2..=May 31): dining 180, shopping 100, transport 40, streaming 15.49
fn two_month_csv() -> &'static str {
    r#"Date,Description,Merchant,Amount,Category
2024-06-03,CHIPOTLE MEXICAN GRILL,Chipotle,220.00,
2024-06-10,PANERA BREAD,Panera,210.00,
2024-06-12,NETFLIX.COM,Netflix,15.49,
2024-06-15,SHELL OIL 5512,Shell,45.00,
2024-06-20,AMAZON MARKETPLACE,Amazon,320.00,
2024-05-10,CHIPOTLE MEXICAN GRILL,Chipotle,180.00,
2024-05-15,NETFLIX.COM,Netflix,15.49,
2024-05-20,AMAZON MARKETPLACE,Amazon,100.00,
2024-05-22,SHELL OIL 5512,Shell,40.00,
2024-04-15,NETFLIX.COM,Netflix,15.49,
2024-01-15,NETFLIX.COM,Netflix,15.49,"#
}

fn as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn load() -> Vec<sift_core::CategorizedTransaction> {
    load_transactions(two_month_csv().as_bytes(), &Categorizer::default())
        .expect("Failed to load CSV")
}

// =============================================================================
// Categorization
// =============================================================================

#[test]
fn test_import_categorizes_every_row() {
    let txs = load();
    assert_eq!(txs.len(), 11);

    let categories: Vec<&str> = txs[..5].iter().map(|t| t.category.as_str()).collect();
    assert_eq!(
        categories,
        vec![
            category::FOOD_AND_DINING,
            category::FOOD_AND_DINING,
            category::ENTERTAINMENT,
            category::TRANSPORTATION,
            category::SHOPPING,
        ]
    );
    assert!(txs
        .iter()
        .all(|t| t.confidence.map_or(false, |c| (0.0..=0.95).contains(&c))));
}

#[test]
fn test_categorizer_scenarios() {
    let categorizer = Categorizer::default();

    let starbucks = categorizer
        .categorize(&TransactionInput::new("STARBUCKS STORE #123", 5.75).with_merchant("Starbucks"));
    assert_eq!(starbucks.category, category::FOOD_AND_DINING);
    assert!(starbucks.confidence >= 0.6);

    let misc = categorizer.categorize(&TransactionInput::new("Misc Purchase", 600.0));
    assert_eq!(misc.category, category::LARGE_PURCHASE);
    assert_eq!(misc.confidence, 0.6);
}

// =============================================================================
// Insights
// =============================================================================

#[test]
fn test_insights_over_two_windows() {
    let txs = load();
    let (current, previous) = split_windows(&txs, as_of(), 30);
    assert_eq!(current.len(), 5);
    assert_eq!(previous.len(), 4);

    let insights = InsightGenerator::new().generate(&current, &previous);
    assert_eq!(insights.len(), 5);

    let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Food & Dining Overspend Alert",
            "Shopping Overspend Alert",
            "Increased Spending Trend",
            "Dining Savings Opportunity",
            "Large Transactions Detected",
        ]
    );

    assert_eq!(insights[0].priority, Priority::High);
    assert_eq!(
        insights[2].message,
        "Your overall spending increased by $475.00 this month"
    );
    assert_eq!(insights[4].message, "3 transactions over $200 this month");
    assert!(insights.iter().all(|i| (0.0..=1.0).contains(&i.confidence)));
}

#[test]
fn test_dining_without_previous_window() {
    let date = as_of();
    let current = vec![
        sift_core::CategorizedTransaction::new(date, "BISTRO", 250.0, category::FOOD_AND_DINING),
        sift_core::CategorizedTransaction::new(date, "DELI", 200.0, category::FOOD_AND_DINING),
    ];

    let insights = InsightGenerator::new().generate(&current, &[]);
    assert!(insights.iter().any(|i| i.kind == InsightKind::Recommendation));
    assert!(!insights.iter().any(|i| i.kind == InsightKind::Overspending));
}

#[test]
fn test_repeated_generation_is_identical() {
    let txs = load();
    let (current, previous) = split_windows(&txs, as_of(), 30);
    let generator = InsightGenerator::new();

    assert_eq!(
        generator.generate(&current, &previous),
        generator.generate(&current, &previous)
    );
}

// =============================================================================
// Subscriptions
// =============================================================================

#[test]
fn test_subscriptions_in_ninety_day_window() {
    let txs = load();
    let window = Period::trailing(as_of(), 90).filter(&txs);

    let detector = SubscriptionDetector::default();
    let found = detector.detect(&window);
    assert_eq!(found.len(), 3);
    assert!(found.iter().all(|t| t.description == "NETFLIX.COM"));

    let summary = SubscriptionSummary::from_candidates(&found);
    assert!((summary.monthly_cost - 46.47).abs() < 1e-9);
    assert!((summary.annual_cost - 557.64).abs() < 1e-9);
}

// =============================================================================
// Budgets
// =============================================================================

#[test]
fn test_budget_scenarios() {
    let approaching = analyze_budget(450.0, 500.0);
    assert_eq!(approaching.status, BudgetStatus::Approaching);
    assert!((approaching.percentage - 90.0).abs() < 1e-9);
    assert!(approaching.message.contains("10"));

    let over = analyze_budget(600.0, 500.0);
    assert_eq!(over.status, BudgetStatus::Over);
    assert!((over.percentage - 120.0).abs() < 1e-9);
    assert!(over.message.contains("20"));
}

#[test]
fn test_month_to_date_budget_reports() {
    let txs = load();
    let month = Period::month_to_date(as_of()).filter(&txs);
    let budgets = parse_budgets(
        "Category,Monthly Limit\nFood & Dining,500\nShopping,300\n".as_bytes(),
    )
    .unwrap();

    let reports = evaluate_budgets(&budgets, &month, as_of());
    assert_eq!(reports[0].status, BudgetStatus::Approaching);
    assert_eq!(reports[0].transaction_count, 2);
    assert_eq!(reports[1].status, BudgetStatus::Over);
    assert_eq!(reports[1].message, "Budget exceeded by 7%");
    assert_eq!(reports[1].days_into_month, 30);
    assert!((reports[1].projected_monthly_spend - 320.0).abs() < 1e-9);
}

// =============================================================================
// Breakdown & Recommendations
// =============================================================================

#[test]
fn test_breakdown_and_recommendations() {
    let txs = load();
    let current = Period::trailing(as_of(), 30).filter(&txs);

    let breakdown = category_breakdown(&current);
    assert_eq!(breakdown.categories[0].category, category::FOOD_AND_DINING);
    assert!((breakdown.categories[0].total_spent - 430.0).abs() < 1e-9);
    assert_eq!(breakdown.categories.len(), 4);

    let set = recommend(&current, &SubscriptionDetector::default());
    assert_eq!(set.recommendations.len(), 1);
    assert!((set.total_potential_savings - 129.0).abs() < 1e-9);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_engine_shared_across_threads() {
    let categorizer = Categorizer::default();
    let generator = InsightGenerator::new();
    let txs = load();
    let (current, previous) = split_windows(&txs, as_of(), 30);
    let expected = generator.generate(&current, &previous);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let result = categorizer
                    .categorize(&TransactionInput::new("UBER TRIP", 20.0));
                assert_eq!(result.category, category::TRANSPORTATION);
                assert_eq!(generator.generate(&current, &previous), expected);
            });
        }
    });
}
