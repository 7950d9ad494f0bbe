pub use super::bet::Entity as Bet;
pub use super::casino_balance::Entity as CasinoBalance;
pub use super::championship_registration::Entity as ChampionshipRegistration;
pub use super::match_stats::Entity as MatchStats;
pub use super::matches::Entity as Match;
pub use super::mix_availability::Entity as MixAvailability;
pub use super::mix_penalty::Entity as MixPenalty;
pub use super::monthly_ranking::Entity as MonthlyRanking;
pub use super::news::Entity as News;
pub use super::payment::Entity as Payment;
pub use super::report::Entity as Report;
pub use super::user::Entity as User;
