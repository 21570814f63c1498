//! Collects translatable fields from database and map records into catalogs.

use crate::{
    constants::TERM_CONTEXT,
    events::MessageExtractor,
    records::{Database, Map},
    types::{Entry, EventCommand, Location},
    Catalog,
};

/// A vocabulary entry. Some messages are stored without their leading placeholders,
/// so `prefix` is prepended. Sentences split over two fields are joined through `tail`.
struct Term {
    prefix: &'static str,
    key: &'static str,
    tail: Option<(&'static str, &'static str)>,
    info: &'static str,
}

const fn plain(key: &'static str, info: &'static str) -> Term {
    Term {
        prefix: "",
        key,
        tail: None,
        info,
    }
}

const fn prefixed(
    prefix: &'static str,
    key: &'static str,
    info: &'static str,
) -> Term {
    Term {
        prefix,
        key,
        tail: None,
        info,
    }
}

const fn joined(
    key: &'static str,
    infix: &'static str,
    tail_key: &'static str,
    info: &'static str,
) -> Term {
    Term {
        prefix: "",
        key,
        tail: Some((infix, tail_key)),
        info,
    }
}

const BATTLE_TERMS: &[Term] = &[
    prefixed("%S", "encounter", "Term: Battle encounter\n%S: Enemy name"),
    plain("special_combat", "Term: Battle surprise attack"),
    plain("escape_success", "Term: Battle escape success"),
    plain("escape_failure", "Term: Battle escape failed"),
    plain("victory", "Term: Battle victory"),
    plain("defeat", "Term: Battle defeat"),
    prefixed("%V %U", "exp_received", "Term: Battle exp received\n%V: EXP amount\n%U: EXP term"),
    joined("gold_recieved_a", "%V%U", "gold_recieved_b", "Term: Battle gold received\n%V: Gold amount\n%U: Gold term"),
    prefixed("%S", "item_recieved", "Term: Battle item received\n%S: Item name"),
    prefixed("%S", "attacking", "Term: Battle normal attack\n%S: Source name"),
    prefixed("%S", "actor_critical", "Term: Battle ally landed critical hit\n%S: Source name\n%O: Target name"),
    prefixed("%S", "enemy_critical", "Term: Battle enemy landed critical hit\n%S: Source name\n%O: Target name"),
    prefixed("%S", "defending", "Term: Battle defending\n%S: Source name"),
    prefixed("%S", "observing", "Term: Battle observing\n%S: Source name"),
    prefixed("%S", "focus", "Term: Battle focus\n%S: Source name"),
    prefixed("%S", "autodestruction", "Term: Battle enemy autodestruct\n%S: Source name"),
    prefixed("%S", "enemy_escape", "Term: Battle enemy escape\n%S: Source name"),
    prefixed("%S", "enemy_transform", "Term: Battle enemy transform\n%S: Source name"),
    prefixed("%S %V", "enemy_damaged", "Term: Battle enemy damaged\n%S: Source name\n%V: Damage amount"),
    prefixed("%S", "enemy_undamaged", "Term: Battle enemy not damaged\n%S: Target name"),
    prefixed("%S %V", "actor_damaged", "Term: Battle actor damaged\n%S: Source name\n%V: Damage amount"),
    prefixed("%S", "actor_undamaged", "Term: Battle actor not damaged\n%S: Target name"),
    prefixed("%O", "skill_failure_a", "Term: Battle skill failure a\n%S: Source name\n%O: Target name"),
    prefixed("%O", "skill_failure_b", "Term: Battle skill failure b\n%S: Source name\n%O: Target name"),
    prefixed("%O", "skill_failure_c", "Term: Battle skill failure c\n%S: Source name\n%O: Target name"),
    prefixed("%O", "dodge", "Term: Battle dodge\n%S: Source name\n%O: Target name"),
    prefixed("%S %O", "use_item", "Term: Battle use item\n%S: Source name\n%O: Item name"),
    prefixed("%S", "hp_recovery", "Term: Battle hp recovery\n%S: Source name\n%V: HP amount\n%U: HP term"),
    prefixed("%S %V %U", "parameter_increase", "Term: Battle parameter increase\n%S: Source name\n%V: Parameter amount\n%U: Parameter term"),
    prefixed("%S %V %U", "parameter_decrease", "Term: Battle parameter decrease\n%S: Source name\n%V: Parameter amount\n%U: Parameter term"),
    prefixed("%S %V %U", "actor_hp_absorbed", "Term: Battle actor hp absorbed\n%S: Source name\n%O: Target name\n%V: Parameter amount\n%U: Parameter term"),
    prefixed("%S %V %U", "enemy_hp_absorbed", "Term: Battle enemy hp absorbed\n%S: Source name\n%O: Target name\n%V: Parameter amount\n%U: Parameter term"),
    prefixed("%S %O", "resistance_increase", "Term: Battle resistance increase\n%S: Source name\n%O: Parameter term"),
    prefixed("%S %O", "resistance_decrease", "Term: Battle resistance decrease\n%S: Source name\n%O: Parameter term"),
    prefixed("%S %V %U", "level_up", "Term: Level up\n%S: Source name\n%U: Level\n%V: Level term"),
    prefixed("%S", "skill_learned", "Term: Skill learned\n%S: Source name\n%O: Skill name"),
    plain("battle_start", "Term: Battle start"),
    plain("miss", "Term: Miss (RPG2k3)"),
];

/// Shop vocabulary exists in three variants, keys end with the variant number.
const SHOP_TERMS: [(&str, &str); 11] = [
    ("shop_greeting", "Shop greeting"),
    ("shop_regreeting", "Shop regreeting"),
    ("shop_buy", "Shop buy"),
    ("shop_sell", "Shop sell"),
    ("shop_leave", "Shop leave"),
    ("shop_buy_select", "Shop buy select"),
    ("shop_buy_number", "Shop buy amount"),
    ("shop_purchased", "Shop purchased"),
    ("shop_sell_select", "Shop sell select"),
    ("shop_sell_number", "Shop sell amount"),
    ("shop_sold", "Shop sold"),
];

const SHOP_VARIANTS: [char; 3] = ['1', '2', '3'];
const INN_VARIANTS: [char; 2] = ['a', 'b'];

const MENU_TERMS: &[Term] = &[
    plain("possessed_items", "Term: Shop owned items"),
    plain("equipped_items", "Term: Shop equipped items"),
    plain("gold", "Term: Gold"),
    plain("battle_fight", "Term: Battle fight"),
    plain("battle_auto", "Term: Battle auto"),
    plain("battle_escape", "Term: Battle escape"),
    plain("command_attack", "Term: Battle command attack"),
    plain("command_defend", "Term: Battle command defend"),
    plain("command_item", "Term: Battle command item"),
    plain("command_skill", "Term: Battle command skill"),
    plain("menu_equipment", "Term: Menu equipment"),
    plain("menu_save", "Term: Menu save"),
    plain("menu_quit", "Term: Menu quit"),
    plain("new_game", "Term: New game"),
    plain("load_game", "Term: Load game"),
    plain("exit_game", "Term: Exit game"),
    plain("status", "Term: Status"),
    plain("row", "Term: Row"),
    plain("order", "Term: Order"),
    plain("wait_on", "Term: ATB wait on"),
    plain("wait_off", "Term: ATB wait off"),
    plain("level", "Term: Level"),
    plain("health_points", "Term: Health points"),
    plain("spirit_points", "Term: Spirit points"),
    plain("normal_status", "Term: Normal status"),
    plain("exp_short", "Term: Exp short"),
    plain("lvl_short", "Term: Level short"),
    plain("hp_short", "Term: HP short"),
    plain("sp_short", "Term: SP short"),
    plain("sp_cost", "Term: SP cost"),
    plain("attack", "Term: Attack stat"),
    plain("defense", "Term: Defense stat"),
    plain("spirit", "Term: Spirit stat"),
    plain("agility", "Term: Agility stat"),
    plain("weapon", "Term: Weapon equipment"),
    plain("shield", "Term: Shield equipment"),
    plain("armor", "Term: Armor equipment"),
    plain("helmet", "Term: Helmet equipment"),
    plain("accessory", "Term: Accessory equipment"),
    plain("save_game_message", "Term: Save game message"),
    plain("load_game_message", "Term: Load game message"),
    plain("file", "Term: File"),
    plain("exit_game_message", "Term: Exit game message"),
    plain("yes", "Term: Yes"),
    plain("no", "Term: No"),
];

impl Catalog {
    /// Builds the catalog of `RPG_RT.ldb`: record fields, vocabulary, then common event dialogue.
    #[must_use]
    pub fn from_database(database: &Database) -> Self {
        let mut catalog = Self::new();

        for (i, actor) in database.actors.iter().enumerate() {
            let n = i + 1;
            catalog.add_field("actor.name", &actor.name, format!("Actor {n}: Name"));
            catalog.add_field("actor.title", &actor.title, format!("Actor {n}: Title"));
            catalog.add_field(
                "actor.skill_name",
                &actor.skill_name,
                format!("Actor {n}: Skill name"),
            );
        }

        for (i, class) in database.classes.iter().enumerate() {
            catalog.add_field("cls.name", &class.name, format!("Class {}: Name", i + 1));
        }

        for (i, skill) in database.skills.iter().enumerate() {
            let n = i + 1;
            catalog.add_field("skill.name", &skill.name, format!("Skill {n}: Name"));
            catalog.add_field(
                "skill.description",
                &skill.description,
                format!("Skill {n}: Description"),
            );
            catalog.add_prefixed(
                "skill.using_message1",
                "%S",
                &skill.using_message1,
                format!("Skill {n}: Using message 1\n%S: Source name"),
            );
            catalog.add_prefixed(
                "skill.using_message2",
                "%S",
                &skill.using_message2,
                format!("Skill {n}: Using message 2\n%S: Source name"),
            );
        }

        for (i, item) in database.items.iter().enumerate() {
            let n = i + 1;
            catalog.add_field("item.name", &item.name, format!("Item {n}: Name"));
            catalog.add_field(
                "item.description",
                &item.description,
                format!("Item {n}: Description"),
            );
        }

        for (i, enemy) in database.enemies.iter().enumerate() {
            catalog.add_field("enemy.name", &enemy.name, format!("Enemy {}: Name", i + 1));
        }

        for (i, state) in database.states.iter().enumerate() {
            let n = i + 1;
            catalog.add_field("state.name", &state.name, format!("State {n}: Name"));

            for (context, message, label) in [
                ("state.message_actor", &state.message_actor, "Message actor"),
                ("state.message_enemy", &state.message_enemy, "Message enemy"),
                ("state.message_already", &state.message_already, "Message already"),
                ("state.message_affected", &state.message_affected, "Message affected"),
                ("state.message_recovery", &state.message_recovery, "Message recovery"),
            ] {
                catalog.add_prefixed(
                    context,
                    "%S",
                    message,
                    format!("State {n}: {label}\n%S: Target name"),
                );
            }
        }

        for (i, command) in database.battle_commands.iter().enumerate() {
            catalog.add_field(
                "bcmd.name",
                &command.name,
                format!("Battle command {}: Name", i + 1),
            );
        }

        catalog.add_terms(database, BATTLE_TERMS);

        for variant in SHOP_VARIANTS {
            for (field, label) in SHOP_TERMS {
                catalog.add_field(
                    TERM_CONTEXT,
                    database.term(&format!("{field}{variant}")),
                    format!("Term: {label} {variant}"),
                );
            }
        }

        for variant in INN_VARIANTS {
            let inn = variant.to_ascii_uppercase();
            let term = |field: &str| database.term(&format!("inn_{variant}_{field}"));

            // First two greeting parts form one sentence around the price.
            catalog.add_joined(
                TERM_CONTEXT,
                term("greeting_1"),
                "%V%U",
                term("greeting_2"),
                format!("Term: Inn {inn} greeting 1\n%V: Gold amount\n%U: Gold term"),
            );
            catalog.add_field(
                TERM_CONTEXT,
                term("greeting_3"),
                format!("Term: Inn {inn} greeting 2"),
            );
            catalog.add_field(TERM_CONTEXT, term("accept"), format!("Term: Inn {inn} accept"));
            catalog.add_field(TERM_CONTEXT, term("cancel"), format!("Term: Inn {inn} cancel"));
        }

        catalog.add_terms(database, MENU_TERMS);

        for (i, common_event) in database.common_events.iter().enumerate() {
            catalog.add_event_commands(
                Location::CommonEvent { id: i + 1 },
                &common_event.event_commands,
            );
        }

        catalog
    }

    /// Builds the catalog of a `MapXXXX.lmu`: dialogue and choices of every event page.
    #[must_use]
    pub fn from_map(map: &Map) -> Self {
        let mut catalog = Self::new();

        for event in &map.events {
            for (i, page) in event.pages.iter().enumerate() {
                catalog.add_event_commands(
                    Location::MapEvent {
                        id: event.id,
                        page: i + 1,
                    },
                    &page.event_commands,
                );
            }
        }

        catalog
    }

    /// Runs `commands` through [`MessageExtractor`] and adds the produced entries.
    pub fn add_event_commands(
        &mut self,
        location: Location,
        commands: &[EventCommand],
    ) {
        for entry in MessageExtractor::extract(location, commands) {
            self.add(entry);
        }
    }

    fn add_field(&mut self, context: &str, original: &str, info: String) {
        self.add(Entry::new(context, original, info));
    }

    /// Adds `prefix` + `text`. Skipped if `text` is empty, since the bare placeholder isn't translatable.
    fn add_prefixed(
        &mut self,
        context: &str,
        prefix: &str,
        text: &str,
        info: String,
    ) {
        if text.is_empty() {
            return;
        }

        self.add(Entry::new(context, format!("{prefix}{text}"), info));
    }

    /// Adds `head` + `infix` + `tail`. Skipped if both parts are empty.
    fn add_joined(
        &mut self,
        context: &str,
        head: &str,
        infix: &str,
        tail: &str,
        info: String,
    ) {
        if head.is_empty() && tail.is_empty() {
            return;
        }

        self.add(Entry::new(context, format!("{head}{infix}{tail}"), info));
    }

    fn add_terms(&mut self, database: &Database, terms: &[Term]) {
        for term in terms {
            let text = database.term(term.key);

            match term.tail {
                Some((infix, tail_key)) => self.add_joined(
                    TERM_CONTEXT,
                    text,
                    infix,
                    database.term(tail_key),
                    term.info.to_owned(),
                ),
                None => self.add_prefixed(
                    TERM_CONTEXT,
                    term.prefix,
                    text,
                    term.info.to_owned(),
                ),
            }
        }
    }
}
