//! Recommendation content shipped with the engine: two actions per category.

use compass_core::Difficulty;

/// One catalog row before conversion into a `Recommendation`.
pub(super) struct Seed {
    pub(super) id: &'static str,
    pub(super) title: (&'static str, &'static str),
    pub(super) description: (&'static str, &'static str),
    pub(super) tags: &'static [u8],
    pub(super) difficulty: Difficulty,
    pub(super) estimated_time: &'static str,
}

/// Category number to ordered rows. Titles and descriptions are `(ja, en)`.
pub(super) const BUILTIN: &[(u8, &[Seed])] = &[
    (
        1,
        &[
            Seed {
                id: "poverty-1",
                title: ("フードバンクに寄付", "Donate to food bank"),
                description: (
                    "地域のフードバンクに食品を寄付する",
                    "Donate food to local food bank",
                ),
                tags: &[1, 2],
                difficulty: Difficulty::Easy,
                estimated_time: "10分",
            },
            Seed {
                id: "poverty-2",
                title: ("学習支援ボランティア", "Tutoring volunteer"),
                description: (
                    "低所得家庭の子供たちの学習を支援する",
                    "Support learning for children from low-income families",
                ),
                tags: &[1, 4],
                difficulty: Difficulty::Medium,
                estimated_time: "2時間",
            },
        ],
    ),
    (
        2,
        &[
            Seed {
                id: "hunger-1",
                title: ("食品ロス削減計画", "Food waste reduction plan"),
                description: (
                    "買い物リストを作成し、必要な分だけ購入する",
                    "Create shopping list and buy only what you need",
                ),
                tags: &[2, 12],
                difficulty: Difficulty::Easy,
                estimated_time: "5分",
            },
            Seed {
                id: "hunger-2",
                title: ("地産地消の実践", "Local food consumption"),
                description: (
                    "地元の農産物を積極的に購入する",
                    "Actively purchase local agricultural products",
                ),
                tags: &[2, 11],
                difficulty: Difficulty::Easy,
                estimated_time: "15分",
            },
        ],
    ),
    (
        3,
        &[
            Seed {
                id: "health-1",
                title: ("定期的な運動習慣", "Regular exercise routine"),
                description: (
                    "週3回、30分の運動を継続する",
                    "Exercise 30 minutes, 3 times a week",
                ),
                tags: &[3],
                difficulty: Difficulty::Medium,
                estimated_time: "30分",
            },
            Seed {
                id: "health-2",
                title: ("メンタルヘルスケア", "Mental health care"),
                description: (
                    "ストレス管理とリラクゼーションを実践する",
                    "Practice stress management and relaxation",
                ),
                tags: &[3],
                difficulty: Difficulty::Easy,
                estimated_time: "10分",
            },
        ],
    ),
    (
        4,
        &[
            Seed {
                id: "education-1",
                title: ("オンライン学習の活用", "Utilize online learning"),
                description: (
                    "無料のオンラインコースでスキルアップする",
                    "Improve skills with free online courses",
                ),
                tags: &[4, 9],
                difficulty: Difficulty::Easy,
                estimated_time: "1時間",
            },
            Seed {
                id: "education-2",
                title: ("学習支援活動", "Learning support activities"),
                description: (
                    "地域の学習支援活動に参加する",
                    "Participate in local learning support activities",
                ),
                tags: &[4, 10],
                difficulty: Difficulty::Medium,
                estimated_time: "2時間",
            },
        ],
    ),
    (
        5,
        &[
            Seed {
                id: "gender-1",
                title: ("ジェンダー平等の啓発", "Gender equality awareness"),
                description: (
                    "SNSでジェンダー平等について発信する",
                    "Share about gender equality on social media",
                ),
                tags: &[5, 16],
                difficulty: Difficulty::Easy,
                estimated_time: "15分",
            },
            Seed {
                id: "gender-2",
                title: ("インクルーシブな環境づくり", "Create inclusive environment"),
                description: (
                    "職場や学校で多様性を尊重する環境を作る",
                    "Create an environment that respects diversity at work or school",
                ),
                tags: &[5, 10],
                difficulty: Difficulty::Medium,
                estimated_time: "30分",
            },
        ],
    ),
    (
        6,
        &[
            Seed {
                id: "water-1",
                title: ("節水習慣の実践", "Practice water conservation"),
                description: (
                    "シャワー時間を短縮し、水を無駄にしない",
                    "Shorten shower time and avoid wasting water",
                ),
                tags: &[6],
                difficulty: Difficulty::Easy,
                estimated_time: "5分",
            },
            Seed {
                id: "water-2",
                title: ("雨水活用システム", "Rainwater utilization system"),
                description: (
                    "雨水を活用したガーデニングや清掃を行う",
                    "Use rainwater for gardening and cleaning",
                ),
                tags: &[6, 15],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
        ],
    ),
    (
        7,
        &[
            Seed {
                id: "energy-1",
                title: ("省エネ家電の使用", "Use energy-efficient appliances"),
                description: (
                    "LED電球や省エネ家電を積極的に使用する",
                    "Actively use LED bulbs and energy-efficient appliances",
                ),
                tags: &[7, 9],
                difficulty: Difficulty::Easy,
                estimated_time: "20分",
            },
            Seed {
                id: "energy-2",
                title: ("再生可能エネルギーの選択", "Choose renewable energy"),
                description: (
                    "再生可能エネルギーを提供する電力会社を選択する",
                    "Choose electricity companies that provide renewable energy",
                ),
                tags: &[7, 13],
                difficulty: Difficulty::Medium,
                estimated_time: "30分",
            },
        ],
    ),
    (
        8,
        &[
            Seed {
                id: "work-1",
                title: ("フェアトレード商品の購入", "Buy fair trade products"),
                description: (
                    "公正な労働環境で作られた商品を選ぶ",
                    "Choose products made in fair working conditions",
                ),
                tags: &[8, 10],
                difficulty: Difficulty::Easy,
                estimated_time: "10分",
            },
            Seed {
                id: "work-2",
                title: ("スキルアップの投資", "Invest in skill development"),
                description: (
                    "自分のスキル向上に時間とお金を投資する",
                    "Invest time and money in improving your skills",
                ),
                tags: &[8, 4],
                difficulty: Difficulty::Medium,
                estimated_time: "2時間",
            },
        ],
    ),
    (
        9,
        &[
            Seed {
                id: "innovation-1",
                title: ("デジタルスキルの向上", "Improve digital skills"),
                description: (
                    "プログラミングやデジタルツールを学ぶ",
                    "Learn programming and digital tools",
                ),
                tags: &[9, 4],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
            Seed {
                id: "innovation-2",
                title: ("持続可能な技術の学習", "Learn sustainable technology"),
                description: (
                    "環境に優しい技術やイノベーションについて学ぶ",
                    "Learn about environmentally friendly technologies and innovations",
                ),
                tags: &[9, 13],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
        ],
    ),
    (
        10,
        &[
            Seed {
                id: "inequality-1",
                title: ("多様性の尊重", "Respect diversity"),
                description: (
                    "異なる背景を持つ人々の意見を尊重する",
                    "Respect opinions of people from different backgrounds",
                ),
                tags: &[10, 16],
                difficulty: Difficulty::Easy,
                estimated_time: "5分",
            },
            Seed {
                id: "inequality-2",
                title: ("インクルーシブな活動", "Inclusive activities"),
                description: (
                    "誰もが参加できる活動を企画・参加する",
                    "Plan and participate in activities that everyone can join",
                ),
                tags: &[10, 17],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
        ],
    ),
    (
        11,
        &[
            Seed {
                id: "cities-1",
                title: ("公共交通の利用", "Use public transportation"),
                description: (
                    "車の代わりに電車やバスを積極的に利用する",
                    "Actively use trains and buses instead of cars",
                ),
                tags: &[11, 13],
                difficulty: Difficulty::Easy,
                estimated_time: "10分",
            },
            Seed {
                id: "cities-2",
                title: ("地域コミュニティの参加", "Participate in local community"),
                description: (
                    "地域のイベントや活動に積極的に参加する",
                    "Actively participate in local events and activities",
                ),
                tags: &[11, 17],
                difficulty: Difficulty::Medium,
                estimated_time: "2時間",
            },
        ],
    ),
    (
        12,
        &[
            Seed {
                id: "consumption-1",
                title: ("リサイクルの徹底", "Thorough recycling"),
                description: (
                    "分別回収を正しく行い、リサイクルを促進する",
                    "Properly sort waste and promote recycling",
                ),
                tags: &[12],
                difficulty: Difficulty::Easy,
                estimated_time: "5分",
            },
            Seed {
                id: "consumption-2",
                title: ("持続可能な消費", "Sustainable consumption"),
                description: (
                    "長く使える質の良い商品を選ぶ",
                    "Choose high-quality products that last long",
                ),
                tags: &[12, 8],
                difficulty: Difficulty::Easy,
                estimated_time: "15分",
            },
        ],
    ),
    (
        13,
        &[
            Seed {
                id: "climate-1",
                title: ("カーボンフットプリントの削減", "Reduce carbon footprint"),
                description: (
                    "日常の行動でCO2排出量を減らす",
                    "Reduce CO2 emissions through daily actions",
                ),
                tags: &[13],
                difficulty: Difficulty::Easy,
                estimated_time: "10分",
            },
            Seed {
                id: "climate-2",
                title: ("気候変動の学習", "Learn about climate change"),
                description: (
                    "気候変動について学び、情報を共有する",
                    "Learn about climate change and share information",
                ),
                tags: &[13, 4],
                difficulty: Difficulty::Easy,
                estimated_time: "30分",
            },
        ],
    ),
    (
        14,
        &[
            Seed {
                id: "oceans-1",
                title: ("海洋プラスチック削減", "Reduce ocean plastic"),
                description: (
                    "使い捨てプラスチックの使用を減らす",
                    "Reduce use of single-use plastics",
                ),
                tags: &[14, 12],
                difficulty: Difficulty::Easy,
                estimated_time: "5分",
            },
            Seed {
                id: "oceans-2",
                title: ("ビーチクリーンアップ", "Beach cleanup"),
                description: (
                    "海岸の清掃活動に参加する",
                    "Participate in beach cleanup activities",
                ),
                tags: &[14, 11],
                difficulty: Difficulty::Medium,
                estimated_time: "2時間",
            },
        ],
    ),
    (
        15,
        &[
            Seed {
                id: "land-1",
                title: ("生物多様性の保護", "Protect biodiversity"),
                description: (
                    "自然環境を守る活動に参加する",
                    "Participate in activities to protect natural environment",
                ),
                tags: &[15],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
            Seed {
                id: "land-2",
                title: ("植樹活動", "Tree planting"),
                description: (
                    "地域の植樹活動に参加する",
                    "Participate in local tree planting activities",
                ),
                tags: &[15, 13],
                difficulty: Difficulty::Medium,
                estimated_time: "2時間",
            },
        ],
    ),
    (
        16,
        &[
            Seed {
                id: "peace-1",
                title: ("平和のための対話", "Dialogue for peace"),
                description: (
                    "異なる意見を持つ人々との対話を促進する",
                    "Promote dialogue with people who have different opinions",
                ),
                tags: &[16, 17],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
            Seed {
                id: "peace-2",
                title: ("透明性の促進", "Promote transparency"),
                description: (
                    "情報公開や透明性を求める活動に参加する",
                    "Participate in activities demanding information disclosure and transparency",
                ),
                tags: &[16],
                difficulty: Difficulty::Medium,
                estimated_time: "30分",
            },
        ],
    ),
    (
        17,
        &[
            Seed {
                id: "partnership-1",
                title: ("国際協力の支援", "Support international cooperation"),
                description: (
                    "国際的なNGOや団体を支援する",
                    "Support international NGOs and organizations",
                ),
                tags: &[17, 1],
                difficulty: Difficulty::Easy,
                estimated_time: "10分",
            },
            Seed {
                id: "partnership-2",
                title: ("多様なパートナーシップ", "Diverse partnerships"),
                description: (
                    "異なる分野の人々と協力する",
                    "Collaborate with people from different fields",
                ),
                tags: &[17, 10],
                difficulty: Difficulty::Medium,
                estimated_time: "1時間",
            },
        ],
    ),
];
