mod prop_tests {
    use crate::{Application, Chain, config::preset, stage::income::MIN_YEARLY_INCOME};
    use proptest::prelude::*;

    fn any_applicant() -> impl Strategy<Value = Application> {
        (0u64..50_000, -3i32..10, -3i32..10, any::<bool>()).prop_map(
            |(yearly_income, employment_score, history_score, is_employed)| Application {
                yearly_income,
                employment_score,
                history_score,
                is_employed,
                ..Application::new("prop", "Prop Applicant")
            },
        )
    }

    proptest! {
        #[test]
        fn screening_never_touches_core_figures(app in any_applicant()) {
            let chain = Chain::from_config(&preset::strict()).unwrap();
            let before = app.clone();
            let after = chain.screen(app).unwrap();
            prop_assert_eq!(after.yearly_income, before.yearly_income);
            prop_assert_eq!(after.employment_score, before.employment_score);
            prop_assert_eq!(after.history_score, before.history_score);
            prop_assert_eq!(after.is_employed, before.is_employed);
            prop_assert_eq!(&after.id, &before.id);
            prop_assert_eq!(&after.name, &before.name);
        }

        #[test]
        fn screening_is_deterministic(app in any_applicant()) {
            let chain = Chain::from_config(&preset::standard()).unwrap();
            let once = chain.screen(app.clone()).unwrap();
            let twice = chain.screen(app).unwrap();
            prop_assert_eq!(once.offers, twice.offers);
        }

        #[test]
        fn standard_chain_is_all_or_nothing(app in any_applicant()) {
            let chain = Chain::from_config(&preset::standard()).unwrap();
            let after = chain.screen(app).unwrap();
            prop_assert!(after.offers.len() == 0 || after.offers.len() == 3);
        }

        #[test]
        fn full_grant_iff_every_check_passes(app in any_applicant()) {
            let chain = Chain::from_config(&preset::standard()).unwrap();
            let passes = app.is_employed
                && app.employment_score > 0
                && app.yearly_income > MIN_YEARLY_INCOME
                && app.history_score > 0;
            let after = chain.screen(app).unwrap();
            prop_assert_eq!(after.offers.len() == 3, passes);
        }

        #[test]
        fn strict_chain_outcome_follows_final_check(app in any_applicant()) {
            // Every stage runs, so whatever the last check decides is what
            // survives the traversal.
            let chain = Chain::from_config(&preset::strict()).unwrap();
            let history_score = app.history_score;
            let after = chain.screen(app).unwrap();
            prop_assert_eq!(after.has_offers(), history_score > 0);
        }

        #[test]
        fn offer_sources_name_chain_stages(app in any_applicant()) {
            let chain = Chain::from_config(&preset::strict()).unwrap();
            let after = chain.screen(app).unwrap();
            for offer in &after.offers {
                prop_assert!(matches!(offer.source(), "employment" | "income" | "history"));
            }
        }
    }
}
