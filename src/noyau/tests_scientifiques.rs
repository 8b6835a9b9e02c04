//! Tests scientifiques (campagne) : propriétés de la façade de bout en bout.
//!
//! - formes postfixes de référence (précédence, associativité, fonctions)
//! - valeurs (±1e-6)
//! - erreurs d’analyse + positions dans les deux référentiels
//! - erreurs de calcul
//! - chaînes de signes unaires (comportement de la réécriture "0-x" figé ici)
//! - cycle de vie : variables persistantes, postfixe remplacé, idempotence

use super::{
    eval_expression, Calculatrice, Erreur, ErreurAnalyse, ErreurCalcul, ErreurPile,
    ModePosition, Reglages, CAPACITE_DEFAUT,
};

const EPS: f64 = 1e-6;

fn init_log() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn postfixe(expr: &str) -> Vec<String> {
    let mut calc = Calculatrice::new();
    calc.parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    calc.postfix_tokens()
}

fn calc_ok(expr: &str, vars: &[(&str, f64)]) -> f64 {
    init_log();
    let mut calc = Calculatrice::new();
    calc.parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    for (name, v) in vars {
        calc.set_variable_value(name, *v);
    }
    calc.calculate()
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_proche(expr: &str, vars: &[(&str, f64)], attendu: f64) {
    let r = calc_ok(expr, vars);
    assert!(
        (r - attendu).abs() < EPS,
        "expr={expr:?} obtenu={r} attendu={attendu}"
    );
}

fn erreur_analyse(expr: &str, mode: ModePosition) -> ErreurAnalyse {
    let mut calc = Calculatrice::with_reglages(Reglages {
        mode_position: mode,
        ..Reglages::default()
    });
    match calc.parse(expr) {
        Ok(()) => panic!("expr={expr:?} devait échouer"),
        Err(e) => e,
    }
}

fn erreur_calcul(expr: &str) -> ErreurCalcul {
    let mut calc = Calculatrice::new();
    calc.parse(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
    match calc.calculate() {
        Ok(v) => panic!("expr={expr:?} devait échouer, obtenu {v}"),
        Err(e) => e,
    }
}

/* ------------------------ Formes postfixes ------------------------ */

#[test]
fn sci_postfixe_somme_simple() {
    assert_eq!(postfixe("a + b"), ["a", "b", "+"]);
}

#[test]
fn sci_postfixe_priorite() {
    assert_eq!(postfixe("a + b * c"), ["a", "b", "c", "*", "+"]);
}

#[test]
fn sci_postfixe_parentheses() {
    assert_eq!(postfixe("(a + b) * c"), ["a", "b", "+", "c", "*"]);
}

#[test]
fn sci_postfixe_fonction() {
    assert_eq!(postfixe("sin(x) + 2"), ["x", "sin", "2", "+"]);
    assert_eq!(
        postfixe("sqrt(a*a + b*b)"),
        ["a", "a", "*", "b", "b", "*", "+", "sqrt"]
    );
}

#[test]
fn sci_postfixe_associativite() {
    assert_eq!(postfixe("a - b + c"), ["a", "b", "-", "c", "+"]);
    assert_eq!(postfixe("a ^ b ^ c"), ["a", "b", "c", "^", "^"]);
    assert_eq!(postfixe("a * b ^ c"), ["a", "b", "c", "^", "*"]);
}

#[test]
fn sci_postfixe_signe_unaire() {
    assert_eq!(postfixe("-a"), ["0", "a", "-"]);
    assert_eq!(postfixe("(+a) * 2"), ["0", "a", "+", "2", "*"]);
}

#[test]
fn sci_infixe_conserve() {
    let mut calc = Calculatrice::new();
    calc.parse(" -x*( y+1 )").unwrap();
    assert_eq!(
        calc.infix_tokens(),
        ["0", "-", "x", "*", "(", "y", "+", "1", ")"]
    );
    assert_eq!(calc.expression(), " -x*( y+1 )");
}

/* ------------------------ Valeurs ------------------------ */

#[test]
fn sci_valeurs_de_base() {
    assert_proche("a + b", &[("a", 3.0), ("b", 4.0)], 7.0);
    assert_proche("3 * (5 + 2)", &[], 21.0);
    assert_proche("10 + 5", &[], 15.0);
    assert_proche("10 - 4 - 3", &[], 3.0);
    assert_proche("100 / 10 / 5", &[], 2.0);
    assert_proche("2 ^ 3 ^ 2", &[], 512.0);
    assert_proche("1.5 * 4", &[], 6.0);
    assert_proche(".5 + 5.", &[], 5.5);
}

#[test]
fn sci_valeurs_fonctions() {
    assert_proche("sqrt(16) + sin(0) + cos(0)", &[], 5.0);
    assert_proche("sin(x)^2 + cos(x)^2", &[("x", 0.7)], 1.0);
    assert_proche("sqrt(sqrt(81))", &[], 3.0);
    assert_proche("cos(p)", &[("p", std::f64::consts::PI)], -1.0);
}

#[test]
fn sci_variables_par_defaut_a_zero() {
    assert_proche("a + 1", &[], 1.0);
    assert_eq!(eval_expression("x * y + 2"), Ok(2.0));
}

/* ------------------------ Signes unaires ------------------------ */

#[test]
fn sci_unaire_simple() {
    assert_proche("-3 + 5", &[], 2.0);
    assert_proche("(-3) * 2", &[], -6.0);
    assert_proche("+4", &[], 4.0);
    assert_proche("-2 ^ 2", &[], -4.0);
    assert_proche("-sqrt(9)", &[], -3.0);
}

#[test]
fn sci_unaire_imbrique() {
    assert_proche("-(-a)", &[("a", 5.0)], 5.0);
    assert_proche("-(-(-a))", &[("a", 5.0)], -5.0);
    assert_proche("-(+(-a))", &[("a", 2.5)], 2.5);
}

#[test]
fn sci_unaire_sans_parentheses_fige() {
    // "0" inséré sans remise à zéro du drapeau : "--x" => "0-0-x"
    assert_eq!(postfixe("--x"), ["0", "0", "-", "x", "-"]);
    assert_proche("--x", &[("x", 2.0)], -2.0);

    // "2*-3" => "2*0-3"
    assert_proche("2 * -3", &[], -3.0);

    // "2^-1" => "2^0-1"
    assert_proche("2 ^ -1", &[], 0.0);

    // avec parenthèses, le résultat est celui attendu
    assert_proche("2 * (-3)", &[], -6.0);
    assert_proche("2 ^ (-1)", &[], 0.5);
}

/* ------------------------ Erreurs d’analyse ------------------------ */

#[test]
fn sci_parenthese_ouvrante() {
    assert_eq!(
        erreur_analyse("(2 + 3", ModePosition::Normalisee),
        ErreurAnalyse::UnmatchedOpeningParen(0)
    );
    assert_eq!(
        erreur_analyse("((a) + (b", ModePosition::Normalisee),
        ErreurAnalyse::UnmatchedOpeningParen(0)
    );
}

#[test]
fn sci_parenthese_fermante() {
    assert_eq!(
        erreur_analyse("2 + 3)", ModePosition::Normalisee),
        ErreurAnalyse::UnmatchedClosingParen(3)
    );
    assert_eq!(
        erreur_analyse("2 + 3)", ModePosition::Source),
        ErreurAnalyse::UnmatchedClosingParen(5)
    );
}

#[test]
fn sci_caractere_invalide() {
    assert_eq!(
        erreur_analyse("2 @ 3", ModePosition::Normalisee),
        ErreurAnalyse::InvalidCharacter(1)
    );
    assert_eq!(
        erreur_analyse("2 @ 3", ModePosition::Source),
        ErreurAnalyse::InvalidCharacter(2)
    );
    // '.' seul : détecté par le lexeur
    assert_eq!(
        erreur_analyse("4 + .", ModePosition::Normalisee),
        ErreurAnalyse::InvalidCharacter(2)
    );
    assert_eq!(
        erreur_analyse("4 + .", ModePosition::Source),
        ErreurAnalyse::InvalidCharacter(4)
    );
}

#[test]
fn sci_positions_avec_zero_insere() {
    // "-(a" => "0-(a" : '(' en 2 (normalisé), en 1 (source)
    assert_eq!(
        erreur_analyse("-(a", ModePosition::Normalisee),
        ErreurAnalyse::UnmatchedOpeningParen(2)
    );
    assert_eq!(
        erreur_analyse("-(a", ModePosition::Source),
        ErreurAnalyse::UnmatchedOpeningParen(1)
    );
    // "-a # 1" : 3 dans les deux cas (le "0" inséré compense l’espace)
    assert_eq!(
        erreur_analyse("-a # 1", ModePosition::Normalisee).position(),
        Some(3)
    );
}

#[test]
fn sci_echec_vide_le_postfixe() {
    let mut calc = Calculatrice::new();
    calc.parse("a + 1").unwrap();
    assert!(calc.parse("(q + 1").is_err());

    assert!(calc.postfix_tokens().is_empty());
    assert!(calc.infix_tokens().is_empty());
    assert_eq!(calc.calculate(), Err(ErreurCalcul::NoExpression));

    // la découverte a eu lieu avant l’échec
    assert_eq!(calc.variable_names(), ["a", "q"]);
}

#[test]
fn sci_capacite_fixe() {
    let fixe = |c: usize| {
        Calculatrice::with_reglages(Reglages {
            capacite_fixe: Some(c),
            ..Reglages::default()
        })
    };

    // capacité historique : 100 parenthèses imbriquées passent, pas 101
    let imbrique = |n: usize| format!("{}1{}", "(".repeat(n), ")".repeat(n));
    let mut calc = fixe(CAPACITE_DEFAUT);
    calc.parse(&imbrique(100)).unwrap();
    assert_eq!(calc.calculate(), Ok(1.0));
    assert_eq!(
        calc.parse(&imbrique(101)),
        Err(ErreurAnalyse::Pile(ErreurPile::Overflow))
    );

    // une longue somme plate tient dans peu de place
    let somme = vec!["1"; 500].join("+");
    calc.parse(&somme).unwrap();
    assert_eq!(calc.calculate(), Ok(500.0));

    assert_eq!(
        fixe(0).parse("1"),
        Err(ErreurAnalyse::Pile(ErreurPile::InvalidCapacity))
    );
}

/* ------------------------ Erreurs de calcul ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(erreur_calcul("10 / 0"), ErreurCalcul::DivisionByZero);
    assert_eq!(erreur_calcul("1 / (a - a)"), ErreurCalcul::DivisionByZero);
}

#[test]
fn sci_racine_negative() {
    assert_eq!(erreur_calcul("sqrt(-4)"), ErreurCalcul::NegativeSquareRoot);
}

#[test]
fn sci_litteral_mal_forme() {
    assert_eq!(
        erreur_calcul("1.2.3 + 1"),
        ErreurCalcul::UnknownIdentifier("1.2.3".into())
    );
}

#[test]
fn sci_mal_formees() {
    assert_eq!(erreur_calcul("2 x"), ErreurCalcul::MalformedExpression);
    assert_eq!(erreur_calcul("2 *"), ErreurCalcul::MalformedExpression);
    assert_eq!(erreur_calcul("sin"), ErreurCalcul::MalformedExpression);
    assert_eq!(erreur_calcul("()"), ErreurCalcul::MalformedExpression);
    assert_eq!(erreur_calcul(""), ErreurCalcul::MalformedExpression);
    assert_eq!(erreur_calcul("   "), ErreurCalcul::MalformedExpression);
}

#[test]
fn sci_calcul_sans_parse() {
    assert_eq!(Calculatrice::new().calculate(), Err(ErreurCalcul::NoExpression));
}

#[test]
fn sci_variable_supprimee_apres_parse() {
    let mut calc = Calculatrice::new();
    calc.parse("k * 2").unwrap();
    calc.remove_variable("k");
    assert_eq!(
        calc.calculate(),
        Err(ErreurCalcul::UnknownIdentifier("k".into()))
    );
    calc.set_variable_value("k", 4.0);
    assert_eq!(calc.calculate(), Ok(8.0));
}

#[test]
fn sci_eval_expression_erreurs() {
    assert_eq!(
        eval_expression("(1"),
        Err(Erreur::Analyse(ErreurAnalyse::UnmatchedOpeningParen(0)))
    );
    assert_eq!(
        eval_expression("1/0"),
        Err(Erreur::Calcul(ErreurCalcul::DivisionByZero))
    );
}

/* ------------------------ Cycle de vie ------------------------ */

#[test]
fn sci_idempotence() {
    let mut calc = Calculatrice::new();
    calc.parse("a * b + sqrt(c) - sin(a)").unwrap();
    calc.set_variable_value("a", 1.25);
    calc.set_variable_value("b", -3.0);
    calc.set_variable_value("c", 2.0);

    let r1 = calc.calculate().unwrap();
    let r2 = calc.calculate().unwrap();
    assert_eq!(r1.to_bits(), r2.to_bits());
}

#[test]
fn sci_variables_persistantes() {
    let mut calc = Calculatrice::new();
    calc.parse("a + b").unwrap();
    calc.set_variable_value("a", 2.0);
    calc.parse("c * a").unwrap();

    assert_eq!(calc.postfix_tokens(), ["c", "a", "*"]);
    assert_eq!(calc.variable_names(), ["a", "b", "c"]);
    assert_eq!(calc.variable_value("a"), Some(2.0));
    assert_eq!(calc.variable_value("c"), Some(0.0));

    calc.clear_variables();
    assert!(calc.variable_names().is_empty());
    assert_eq!(
        calc.calculate(),
        Err(ErreurCalcul::UnknownIdentifier("c".into()))
    );
}

#[test]
fn sci_variables_de_l_expression() {
    let mut calc = Calculatrice::new();
    calc.set_variable_value("autre", 1.0);
    calc.parse("y * x + sin(y) - z2").unwrap();
    assert_eq!(calc.expression_variables(), ["y", "x", "z2"]);
    assert_eq!(calc.variable_names(), ["autre", "x", "y", "z2"]);
}

#[test]
fn sci_fonctions_jamais_variables() {
    let mut calc = Calculatrice::new();
    calc.parse("sin(a) + cos(b) + sqrt(c)").unwrap();
    assert_eq!(calc.variable_names(), ["a", "b", "c"]);

    // même forcé dans la table, un nom de fonction n’est pas listé
    calc.set_variable_value("sin", 3.0);
    assert_eq!(calc.variable_names(), ["a", "b", "c"]);
}
