/// Operator-facing text. Every line is written followed by CRLF.
#[derive(Debug)]
pub struct Messages {
    pub banner: &'static str,
    pub not_ready: &'static [&'static str],
    pub retrying: &'static str,
    pub menu: &'static [&'static str],
    pub unknown_option: &'static str,
    pub name_prompt: &'static str,
    pub name_set: &'static str,
    pub passkey_prompt: &'static str,
    pub passkey_set: &'static str,
    pub module_reply: &'static str,
    pub input_too_long: &'static str,
}

impl Messages {
    pub const FRENCH: Messages = Messages {
        banner: "Configuration du module Bluetooth HC-05",
        not_ready: &[
            "Le module HC-05 ne répond pas aux commandes AT.",
            "Pour passer en mode commande :",
            "  1. Débranchez l'alimentation du module.",
            "  2. Maintenez le bouton du module appuyé.",
            "  3. Rebranchez l'alimentation sans relâcher le bouton.",
            "  4. Relâchez le bouton quand la LED clignote lentement (toutes les 2 s).",
        ],
        retrying: "Nouvel essai dans quelques secondes...",
        menu: &[
            "Module en mode commande. Choisissez une option :",
            "  N : changer le nom du module",
            "  P : changer le code d'appairage",
            "  Toute autre saisie est envoyée telle quelle au module (ex. AT+VERSION?)",
        ],
        unknown_option: "Option non reconnue, envoi de la commande telle quelle : ",
        name_prompt: "Quel nom voulez-vous donner au module ?",
        name_set: "Le module s'appelle maintenant : ",
        passkey_prompt: "Quel code d'appairage voulez-vous utiliser ?",
        passkey_set: "Nouveau code d'appairage : ",
        module_reply: "Réponse du module : ",
        input_too_long: "Saisie trop longue, commande ignorée.",
    };
}
