use common::{Board, Cell, GameState, Outcome, Player, RawMove, BOARD_SIZE};
use gloo::console::log;
use std::fmt;
use yew::prelude::*;

#[derive(Debug, Clone)]
pub enum Message {
    ClickSpace(usize),
    Reset,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::ClickSpace(index) => write!(f, "ClickSpace: {}", index),
            Message::Reset => write!(f, "Reset"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BoardProps {
    pub board: Board,
    pub locked: bool,
    pub onclick: Callback<usize>,
}

// Owns the single mutable GameState; every UI event flows through `update`
// and replaces the rendered snapshot
pub struct Game {
    state: GameState,
}

impl Component for Game {
    type Message = Message;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: GameState::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        log!(msg.to_string());
        match msg {
            Message::ClickSpace(index) => {
                if let Err(err) = self.state.apply(RawMove { index }) {
                    log!(format!("ignored move: {}", err));
                    return false;
                }
                if !matches!(self.state.outcome(), Outcome::Ongoing) {
                    log!(format!(
                        "game over: {}",
                        serde_json::to_string(&self.state).unwrap()
                    ));
                }
            }
            Message::Reset => {
                self.state.reset();
            }
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick_space = ctx.link().callback(|index| Message::ClickSpace(index));
        let onclick_reset = ctx.link().callback(|_| Message::Reset);
        let locked = !matches!(self.state.outcome(), Outcome::Ongoing);
        html! {
            <section id="page">
                <h1>{"Tic-Tac-Toe"}</h1>
                <BoardComponent
                    board={self.state.board().clone()}
                    locked={locked}
                    onclick={onclick_space}/>
                <div class={classes!("status")}>{status_text(&self.state)}</div>
                <button class={classes!("reset")} onclick={onclick_reset}>{"Reset Game"}</button>
            </section>
        }
    }
}

fn status_text(state: &GameState) -> String {
    match state.outcome() {
        Outcome::Win(player) => format!("Winner: {}", player),
        Outcome::Draw => "It's a Draw!".to_string(),
        Outcome::Ongoing => format!("Next Player: {}", state.active_player()),
    }
}

#[function_component(BoardComponent)]
pub fn board(props: &BoardProps) -> Html {
    html! {
        <div class={classes!("board")}>
            <div
                class={classes!("board-grid")}
                style={format!("display: grid; grid-template-rows: repeat({}, 1fr); grid-template-columns: repeat({}, 1fr)", BOARD_SIZE, BOARD_SIZE)}>
                {
                    props.board.cells().iter().enumerate().map(|(idx, cell)| {
                        board_space(idx, cell, props.locked, props.onclick.clone())
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}

fn board_space(
    index: usize,
    cell: &Cell,
    locked: bool,
    onclick_space: Callback<usize>,
) -> Html {
    let onclick = Callback::from(move |_| {
        onclick_space.emit(index);
    });
    let mut class = match cell {
        Cell::Empty => classes!("empty"),
        Cell::Marked { player } => classes!(get_player_class(player)),
    };
    class.extend(classes!("board-space", "bordered"));
    if locked {
        class.extend(classes!("locked"));
    }
    let marker = match cell {
        Cell::Empty => String::new(),
        Cell::Marked { player } => player.to_string(),
    };
    html! {
        <button class={class} {onclick}>{marker}</button>
    }
}

fn get_player_class(player: &Player) -> String {
    match player {
        Player::X => "x".to_string(),
        Player::O => "o".to_string(),
    }
}
