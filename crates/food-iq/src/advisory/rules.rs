use super::profile::HealthProfile;
use super::AdvisoryAccumulator;

/// Predicate half of a rule branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    Condition(&'static str),
    AnyCondition(&'static [&'static str]),
    Goal(&'static str),
    AnyGoal(&'static [&'static str]),
}

impl Guard {
    pub fn matches(&self, profile: &HealthProfile) -> bool {
        match self {
            Guard::Always => true,
            Guard::Condition(condition) => profile.conditions.contains(condition),
            Guard::AnyCondition(conditions) => conditions
                .iter()
                .any(|condition| profile.conditions.contains(condition)),
            Guard::Goal(goal) => profile.goals.contains(goal),
            Guard::AnyGoal(goals) => goals.iter().any(|goal| profile.goals.contains(goal)),
        }
    }
}

/// Effect half of a rule branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A warning paired with an alternative dish.
    Caution {
        warning: &'static str,
        alternative: &'static str,
    },
    Warning(&'static str),
    Alternative(&'static str),
    Approval(&'static str),
}

impl Effect {
    pub(crate) fn apply(&self, accumulator: &mut AdvisoryAccumulator) {
        match self {
            Effect::Caution {
                warning,
                alternative,
            } => {
                accumulator.warn(warning);
                accumulator.suggest(alternative);
            }
            Effect::Warning(warning) => accumulator.warn(warning),
            Effect::Alternative(alternative) => accumulator.suggest(alternative),
            Effect::Approval(message) => accumulator.approve(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch {
    pub guard: Guard,
    pub effect: Effect,
}

/// Foods sharing one priority chain. Only the first matching branch fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleGroup {
    pub name: &'static str,
    pub foods: &'static [&'static str],
    pub branches: &'static [Branch],
}

impl RuleGroup {
    pub fn applies_to(&self, food: &str) -> bool {
        self.foods.iter().any(|candidate| *candidate == food)
    }

    pub fn select(&self, profile: &HealthProfile) -> Option<&Branch> {
        self.branches
            .iter()
            .find(|branch| branch.guard.matches(profile))
    }

    pub(crate) fn evaluate(
        &self,
        food: &str,
        profile: &HealthProfile,
        accumulator: &mut AdvisoryAccumulator,
    ) {
        if !self.applies_to(food) {
            return;
        }

        match self.select(profile) {
            Some(branch) => {
                tracing::debug!(group = self.name, food, guard = ?branch.guard, "rule branch fired");
                branch.effect.apply(accumulator);
            }
            None => tracing::debug!(group = self.name, food, "no branch matched"),
        }
    }
}

const fn when(guard: Guard, effect: Effect) -> Branch {
    Branch { guard, effect }
}

const HEART_RISKS: &[&str] = &["obesity", "cholesterol", "high-bp"];

/// Rule groups in evaluation order. Samosa is named by two groups and
/// collects advice from both.
pub static RULE_TABLE: &[RuleGroup] = &[
    RuleGroup {
        name: "desserts",
        foods: &["gulab_jamun", "jalebi"],
        branches: &[
            when(
                Guard::Condition("diabetes"),
                Effect::Caution {
                    warning: "This dessert is high in sugar, which may not be suitable for diabetes.",
                    alternative: "Try a low-sugar fruit salad or a sugar-free dessert option.",
                },
            ),
            when(
                Guard::Condition("obesity"),
                Effect::Caution {
                    warning: "This sweet item may be high in calories and sugar. Consider healthier alternatives.",
                    alternative: "Try a small portion of dark chocolate or Greek yogurt with berries.",
                },
            ),
            when(
                Guard::Always,
                Effect::Caution {
                    warning: "Jalebi is deep-fried and soaked in sugar syrup; consume in very small quantities if at all.",
                    alternative: "Cut back on frequency and portion size, or look for baked, sugar-free sweets.",
                },
            ),
        ],
    },
    RuleGroup {
        name: "fried_foods",
        foods: &["chole_bhature", "samosa"],
        branches: &[when(
            Guard::AnyCondition(HEART_RISKS),
            Effect::Caution {
                warning: "This is deep-fried and high in saturated fats.",
                alternative: "Consider a baked version or use heart-healthy oils like olive oil for cooking.",
            },
        )],
    },
    RuleGroup {
        name: "rich_dishes",
        foods: &["butter_chicken", "biryani"],
        branches: &[when(
            Guard::Always,
            Effect::Alternative(
                "This dish may be rich in carbs and heavy. Try healthier options like grilled chicken or a chicken salad.",
            ),
        )],
    },
    RuleGroup {
        name: "south_indian",
        foods: &["idli", "masala_dosa"],
        branches: &[
            when(
                Guard::Condition("diabetes"),
                Effect::Caution {
                    warning: "South Indian dishes like dosa and idli can have a high glycemic index.",
                    alternative: "Consider ragi dosa or oats idli, which have a lower glycemic index.",
                },
            ),
            when(
                Guard::Condition("obesity"),
                Effect::Caution {
                    warning: "Watch portion sizes and avoid excessive oil or ghee.",
                    alternative: "Try steamed food over fried, and skip chutneys with too much coconut or oil.",
                },
            ),
            when(
                Guard::Condition("gluten intolerance"),
                Effect::Approval(
                    "Idli and dosa are naturally gluten-free and suitable for your condition.",
                ),
            ),
            when(
                Guard::Always,
                Effect::Approval(
                    "Idli and dosa are generally healthy choices when cooked with minimal oil.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "dhokla",
        foods: &["dhokla"],
        branches: &[
            when(
                Guard::Condition("diabetes"),
                Effect::Approval(
                    "Dhokla is steamed and low in fat. It's a good choice when made with minimal sugar. Pair it with mint chutney instead of sweet chutney.",
                ),
            ),
            when(
                Guard::Always,
                Effect::Approval(
                    "Dhokla is a healthy snack. Pair it with mint chutney instead of sweet chutney for fewer calories.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "samosa",
        foods: &["samosa"],
        branches: &[
            when(
                Guard::AnyCondition(HEART_RISKS),
                Effect::Caution {
                    warning: "Samosas are deep-fried and high in saturated fat.",
                    alternative: "Try a baked samosa or fill it with vegetables and use whole wheat dough.",
                },
            ),
            when(
                Guard::Always,
                Effect::Warning(
                    "Limit intake of fried foods like samosas for better heart health.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "pav_bhaji",
        foods: &["pav_bhaji"],
        branches: &[
            when(
                Guard::AnyCondition(&["cholesterol", "diabetes", "obesity"]),
                Effect::Caution {
                    warning: "Pav Bhaji often contains a lot of butter and refined carbs.",
                    alternative: "Opt for whole wheat pav, reduce butter, or try the bhaji with millet rotis.",
                },
            ),
            when(
                Guard::Always,
                Effect::Warning(
                    "Use minimal butter and go for whole grain pav to make it a healthier meal.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "paneer_butter_masala",
        foods: &["paneer_butter_masala"],
        branches: &[
            when(
                Guard::AnyCondition(&["cholesterol", "diabetes", "obesity", "high-bp"]),
                Effect::Caution {
                    warning: "Paneer Butter Masala is rich in cream and butter, which may not suit your condition.",
                    alternative: "Try grilled paneer, palak paneer with less oil, or tofu curry made with low-fat ingredients.",
                },
            ),
            when(
                Guard::Always,
                Effect::Warning(
                    "Enjoy in moderation. Consider using less butter and cream for a lighter version.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "kadai_paneer",
        foods: &["kadai_paneer"],
        branches: &[
            when(
                Guard::AnyCondition(&["acidity", "high-bp"]),
                Effect::Caution {
                    warning: "Kadai Paneer can be spicy and oily, which may trigger acidity or raise blood pressure.",
                    alternative: "Try paneer sautée with minimal spices or combine with bell peppers and herbs instead of heavy masala.",
                },
            ),
            // Reads the goal set, not the condition set.
            when(
                Guard::Goal("obesity"),
                Effect::Alternative(
                    "Use less oil, pair with whole grains, or swap paneer with tofu for a lighter option.",
                ),
            ),
            when(
                Guard::Always,
                Effect::Approval(
                    "Kadai Paneer is a decent option when made with minimal oil and fresh spices.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "dal_makhani",
        foods: &["dal_makhani"],
        branches: &[
            when(
                Guard::AnyCondition(&["cholesterol", "obesity", "diabetes", "high-bp"]),
                Effect::Caution {
                    warning: "Dal Makhani is rich in butter and cream, which can be heavy for your condition.",
                    alternative: "Opt for plain whole dal like moong or masoor, or make dal makhani with less butter and use low-fat milk or curd instead of cream.",
                },
            ),
            when(
                Guard::Always,
                Effect::Approval(
                    "Dal Makhani can be enjoyed in moderation. Try making it with less ghee and cream for a lighter meal.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "chicken_tikka",
        foods: &["chicken_tikka"],
        branches: &[
            when(
                Guard::Condition("acidity"),
                Effect::Caution {
                    warning: "Chicken Tikka can be spicy and might trigger acidity.",
                    alternative: "Go for lightly spiced grilled chicken or chicken stew.",
                },
            ),
            when(
                Guard::AnyGoal(&["weight loss", "high protein"]),
                Effect::Approval(
                    "Chicken Tikka is high in protein and low in carbs — a great option for your goals!",
                ),
            ),
            when(
                Guard::Always,
                Effect::Approval(
                    "Grilled and flavorful, chicken tikka is a good lean protein source when not overly spicy.",
                ),
            ),
        ],
    },
    RuleGroup {
        name: "aloo_matar",
        foods: &["aloo_matar"],
        branches: &[
            when(
                Guard::Condition("diabetes"),
                Effect::Caution {
                    warning: "Aloo Matar contains potatoes which have a high glycemic index and may affect blood sugar levels.",
                    alternative: "Consider replacing potatoes with low glycemic vegetables like cauliflower or green beans.",
                },
            ),
            when(
                Guard::Condition("obesity"),
                Effect::Caution {
                    warning: "Aloo Matar can be high in calories due to potatoes and possible oil content.",
                    alternative: "Try making it with less oil, or replace some potatoes with more peas for a lower calorie option.",
                },
            ),
            when(
                Guard::Condition("high-bp"),
                Effect::Caution {
                    warning: "Aloo Matar may contain significant salt content which can affect blood pressure.",
                    alternative: "Prepare with minimal salt and use herbs and spices for flavor instead.",
                },
            ),
            when(
                Guard::Condition("gluten intolerance"),
                Effect::Approval(
                    "Aloo Matar is naturally gluten-free and suitable for your condition.",
                ),
            ),
            when(
                Guard::Always,
                Effect::Approval(
                    "Aloo Matar is a balanced dish with protein from peas and carbohydrates from potatoes. Enjoy in moderation as part of a balanced meal.",
                ),
            ),
        ],
    },
];
